//! Scroll-triggered fade/slide reveals.
//!
//! A [`RevealTrigger`] latches the first time its element is visible enough;
//! a [`RevealTransition`] then describes how the element animates in, sampled
//! by seconds since the trigger fired.

use crate::constants::{REVEAL_DURATION_SEC, REVEAL_RISE_PX, REVEAL_THRESHOLD};
use crate::easing::Easing;

/// One-shot visibility latch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    threshold: f32,
    revealed: bool,
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealTrigger {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    /// Feed an intersection ratio. Returns true only on the call that reveals.
    pub fn observe(&mut self, intersection_ratio: f32) -> bool {
        if self.revealed || !(intersection_ratio >= self.threshold) {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Visual state applied to a revealing element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
}

impl RevealFrame {
    pub const SETTLED: RevealFrame = RevealFrame {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTransition {
    pub from: RevealFrame,
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub easing: Easing,
}

impl RevealTransition {
    /// Section headings: rise 30 px while fading in.
    pub fn fade_up() -> Self {
        Self::rise(REVEAL_RISE_PX, REVEAL_DURATION_SEC)
    }

    pub fn rise(distance_px: f32, duration_sec: f32) -> Self {
        Self {
            from: RevealFrame {
                opacity: 0.0,
                translate_y: distance_px,
                ..RevealFrame::SETTLED
            },
            duration_sec,
            delay_sec: 0.0,
            easing: Easing::EaseOut,
        }
    }

    /// Horizontal slide-in; negative distance enters from the left.
    pub fn slide_x(distance_px: f32, duration_sec: f32) -> Self {
        Self {
            from: RevealFrame {
                opacity: 0.0,
                translate_x: distance_px,
                ..RevealFrame::SETTLED
            },
            duration_sec,
            delay_sec: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub fn grow(from_scale: f32, duration_sec: f32) -> Self {
        Self {
            from: RevealFrame {
                opacity: 0.0,
                scale: from_scale,
                ..RevealFrame::SETTLED
            },
            duration_sec,
            delay_sec: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub fn delayed(mut self, delay_sec: f32) -> Self {
        self.delay_sec = delay_sec.max(0.0);
        self
    }

    /// Stats cards: 50 px rise, staggered 0.1 s per card.
    pub fn stat_card(index: usize) -> Self {
        Self::rise(50.0, 0.6).delayed(index as f32 * 0.1)
    }

    /// Division cards slide in from alternating sides.
    pub fn division_card(index: usize) -> Self {
        let side = if index % 2 == 0 { -50.0 } else { 50.0 };
        Self::slide_x(side, REVEAL_DURATION_SEC).delayed(0.2 + index as f32 * 0.2)
    }

    pub fn total_sec(&self) -> f32 {
        self.delay_sec + self.duration_sec
    }

    /// Frame at `since_trigger_sec` seconds after the reveal fired; `None`
    /// means the element has not been revealed and keeps its initial frame.
    pub fn sample(&self, since_trigger_sec: Option<f32>) -> RevealFrame {
        let Some(elapsed) = since_trigger_sec else {
            return self.from;
        };
        let t = elapsed - self.delay_sec;
        if !(t > 0.0) {
            return self.from;
        }
        if self.duration_sec <= 0.0 || t >= self.duration_sec {
            return RevealFrame::SETTLED;
        }
        let s = self.easing.apply(t / self.duration_sec);
        let to = RevealFrame::SETTLED;
        let lerp = |a: f32, b: f32| a + (b - a) * s;
        RevealFrame {
            opacity: lerp(self.from.opacity, to.opacity),
            translate_x: lerp(self.from.translate_x, to.translate_x),
            translate_y: lerp(self.from.translate_y, to.translate_y),
            scale: lerp(self.from.scale, to.scale),
        }
    }
}
