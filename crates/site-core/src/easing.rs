//! Easing curves applied to a normalized segment parameter.

/// Curve mapping a local parameter in \[0, 1\] to an eased parameter.
///
/// Every curve maps 0 to 0 and 1 to 1 exactly, so sampling a keyframed value at
/// a segment boundary returns the authored value without interpolation error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Hermite `3t² - 2t³`: zero velocity at both ends of the segment.
    #[default]
    SmoothStep,
    /// Cubic ease-out, used by the section reveal transitions.
    EaseOut,
    EaseInOut,
    /// Hold the start value for the whole segment (authored hard cut).
    Step,
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Step => {
                if t >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// True when the curve has zero slope at both segment ends.
    pub fn rests_at_ends(&self) -> bool {
        matches!(self, Easing::SmoothStep | Easing::EaseInOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Step,
    ];

    #[test]
    fn endpoints_are_exact() {
        for e in ALL {
            assert_eq!(e.apply(0.0), 0.0, "{e:?} at 0");
            assert_eq!(e.apply(1.0), 1.0, "{e:?} at 1");
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for e in ALL {
            assert_eq!(e.apply(-3.0), 0.0);
            assert_eq!(e.apply(7.0), 1.0);
            assert_eq!(e.apply(f32::NAN), 0.0);
        }
    }

    #[test]
    fn smooth_curves_are_monotonic() {
        for e in [Easing::Linear, Easing::SmoothStep, Easing::EaseOut, Easing::EaseInOut] {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = e.apply(i as f32 / 100.0);
                assert!(v >= prev, "{e:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn smoothstep_has_flat_ends() {
        let h = 1e-3;
        let start_slope = Easing::SmoothStep.apply(h) / h;
        let end_slope = (1.0 - Easing::SmoothStep.apply(1.0 - h)) / h;
        assert!(start_slope < 0.01);
        assert!(end_slope < 0.01);
    }
}
