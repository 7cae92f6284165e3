//! Progress sources for the camera path.
//!
//! The page is a stack of full-viewport sections; scrolling through them maps
//! to progress in \[0, 1\]. Elapsed time and manual control are alternative
//! sources for previews.

use crate::clock::LoopClock;
use crate::constants::SECTION_COUNT;
use crate::error::Result;

/// Anything that can report the current path progress.
pub trait ProgressSource {
    fn progress(&self) -> f32;
}

/// Document scroll position expressed as a fraction of the scrollable range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgress {
    value: f32,
}

impl ScrollProgress {
    pub fn from_scroll(scroll_top: f32, scroll_height: f32, viewport_height: f32) -> Self {
        let range = scroll_height - viewport_height;
        let value = if range.is_finite() && range > 0.0 && scroll_top.is_finite() {
            (scroll_top / range).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { value }
    }
}

impl ProgressSource for ScrollProgress {
    fn progress(&self) -> f32 {
        self.value
    }
}

/// Progress that loops with elapsed time, for an unattended backdrop.
#[derive(Clone, Copy, Debug)]
pub struct ElapsedProgress {
    clock: LoopClock,
}

impl ElapsedProgress {
    pub fn new(period_sec: f32) -> Result<Self> {
        Ok(Self {
            clock: LoopClock::new(period_sec)?,
        })
    }

    pub fn advance(&mut self, dt_sec: f32) {
        self.clock.advance(dt_sec);
    }
}

impl ProgressSource for ElapsedProgress {
    fn progress(&self) -> f32 {
        self.clock.fraction()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ManualProgress(pub f32);

impl ProgressSource for ManualProgress {
    fn progress(&self) -> f32 {
        self.0
    }
}

/// Exponential follower so the camera glides after scroll snaps instead of
/// jumping with the scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressFollower {
    tau_sec: f32,
    current: Option<f32>,
}

impl ProgressFollower {
    pub fn new(tau_sec: f32) -> Self {
        Self {
            tau_sec: tau_sec.max(0.0),
            current: None,
        }
    }

    /// Step toward `target`; the first call snaps to it.
    pub fn follow(&mut self, target: f32, dt_sec: f32) -> f32 {
        if !target.is_finite() {
            return self.current.unwrap_or(0.0);
        }
        let next = match self.current {
            None => target,
            Some(_) if self.tau_sec == 0.0 => target,
            Some(cur) if dt_sec.is_finite() && dt_sec > 0.0 => {
                let alpha = 1.0 - (-dt_sec / self.tau_sec).exp();
                cur + (target - cur) * alpha
            }
            Some(cur) => cur,
        };
        self.current = Some(next);
        next
    }

    pub fn value(&self) -> Option<f32> {
        self.current
    }
}

/// Full-viewport sections of the page, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Mission,
    Divisions,
    TrustBar,
    Numbers,
    Features,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; SECTION_COUNT] = [
        Section::Hero,
        Section::Mission,
        Section::Divisions,
        Section::TrustBar,
        Section::Numbers,
        Section::Features,
        Section::About,
        Section::Contact,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// DOM id of the section container.
    pub fn element_id(self) -> &'static str {
        match self {
            Section::Hero => "out1",
            Section::Mission => "out2",
            Section::Divisions => "out3",
            Section::TrustBar => "out4",
            Section::Numbers => "out5",
            Section::Features => "out6",
            Section::About => "out7",
            Section::Contact => "out8",
        }
    }

    /// Progress at which this section fills the viewport.
    pub fn progress(self) -> f32 {
        self.index() as f32 / (SECTION_COUNT - 1) as f32
    }

    /// Section nearest to the given progress.
    pub fn at(progress: f32) -> Section {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let i = (p * (SECTION_COUNT - 1) as f32).round() as usize;
        Section::ALL[i.min(SECTION_COUNT - 1)]
    }
}
