//! Keyframed camera path driven by a scalar progress value.
//!
//! The table is authored once and validated at construction. `pose_at` is a
//! pure function of progress: it clamps (or wraps, for looping paths) into the
//! authored domain, finds the bracketing keyframes and eases between them.

use crate::easing::Easing;
use crate::error::{Result, SiteError};
use glam::Vec3;

/// Camera placement: where it sits and the point it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Pose {
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    pub fn lerp(&self, other: &Pose, s: f32) -> Pose {
        Pose {
            position: self.position.lerp(other.position, s),
            look_at: self.look_at.lerp(other.look_at, s),
        }
    }

    /// Unit view direction, or zero when position and target coincide.
    pub fn forward(&self) -> Vec3 {
        (self.look_at - self.position).normalize_or_zero()
    }

    /// Largest component-wise displacement between two poses.
    pub fn distance(&self, other: &Pose) -> f32 {
        self.position
            .distance(other.position)
            .max(self.look_at.distance(other.look_at))
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.look_at.is_finite()
    }
}

/// An authored (threshold, pose) pair. `easing` shapes the segment that
/// leaves this keyframe; it is unused on the last one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub threshold: f32,
    pub pose: Pose,
    pub easing: Easing,
}

impl Keyframe {
    pub fn new(threshold: f32, pose: Pose) -> Self {
        Self {
            threshold,
            pose,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Hold this pose until the next keyframe, then jump.
    pub fn cut(self) -> Self {
        self.with_easing(Easing::Step)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathMode {
    /// Out-of-domain progress takes the nearest endpoint pose.
    #[default]
    Clamp,
    /// Progress wraps around the domain; first and last poses must match.
    Loop,
}

#[derive(Clone, Debug)]
pub struct PathAnimator {
    keyframes: Vec<Keyframe>,
    mode: PathMode,
}

const LOOP_CLOSE_EPS: f32 = 1e-4;

impl PathAnimator {
    pub fn new(keyframes: Vec<Keyframe>, mode: PathMode) -> Result<Self> {
        validate(&keyframes)?;
        if mode == PathMode::Loop {
            let first = keyframes[0].pose;
            let last = keyframes[keyframes.len() - 1].pose;
            if first.distance(&last) > LOOP_CLOSE_EPS {
                return Err(SiteError::OpenLoop);
            }
        }
        log::debug!(
            "[path] {} keyframes over [{}, {}] ({:?})",
            keyframes.len(),
            keyframes[0].threshold,
            keyframes[keyframes.len() - 1].threshold,
            mode
        );
        Ok(Self { keyframes, mode })
    }

    pub fn clamped(keyframes: Vec<Keyframe>) -> Result<Self> {
        Self::new(keyframes, PathMode::Clamp)
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn mode(&self) -> PathMode {
        self.mode
    }

    /// Smallest and largest authored thresholds.
    pub fn domain(&self) -> (f32, f32) {
        (
            self.keyframes[0].threshold,
            self.keyframes[self.keyframes.len() - 1].threshold,
        )
    }

    pub fn pose_at(&self, progress: f32) -> Pose {
        let (lo, hi) = self.domain();
        let p = self.resolve(progress);
        let last = self.keyframes.len() - 1;
        if p <= lo {
            return self.keyframes[0].pose;
        }
        if p >= hi {
            return self.keyframes[last].pose;
        }
        // First keyframe strictly after p; lies in 1..=last because lo < p < hi.
        let next = self.keyframes.partition_point(|k| k.threshold <= p);
        let a = &self.keyframes[next - 1];
        let b = &self.keyframes[next];
        let span = b.threshold - a.threshold;
        if span <= f32::EPSILON {
            return a.pose;
        }
        let t = (p - a.threshold) / span;
        a.pose.lerp(&b.pose, a.easing.apply(t))
    }

    fn resolve(&self, progress: f32) -> f32 {
        let (lo, hi) = self.domain();
        if progress.is_nan() {
            return lo;
        }
        match self.mode {
            PathMode::Clamp => progress.clamp(lo, hi),
            PathMode::Loop if hi > lo && progress.is_finite() => {
                lo + (progress - lo).rem_euclid(hi - lo)
            }
            PathMode::Loop => progress.clamp(lo, hi),
        }
    }
}

fn validate(keyframes: &[Keyframe]) -> Result<()> {
    if keyframes.is_empty() {
        return Err(SiteError::EmptyKeyframes);
    }
    for (index, kf) in keyframes.iter().enumerate() {
        if !kf.threshold.is_finite() || !kf.pose.is_finite() {
            return Err(SiteError::NonFiniteKeyframe { index });
        }
        if index > 0 {
            let previous = keyframes[index - 1].threshold;
            if kf.threshold <= previous {
                return Err(SiteError::NonIncreasingThreshold {
                    index,
                    previous,
                    threshold: kf.threshold,
                });
            }
        }
    }
    Ok(())
}
