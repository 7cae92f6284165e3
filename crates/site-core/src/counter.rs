use crate::constants::{COUNTER_DURATION_SEC, COUNTER_START_DELAY_SEC};
use crate::easing::Easing;

/// Stat that counts up from zero once its section comes into view.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    suffix: &'static str,
    duration_sec: f32,
    delay_sec: f32,
    // None until triggered
    elapsed_sec: Option<f32>,
}

impl CountUp {
    pub fn new(target: u32, suffix: &'static str) -> Self {
        Self {
            target,
            suffix,
            duration_sec: COUNTER_DURATION_SEC,
            delay_sec: COUNTER_START_DELAY_SEC,
            elapsed_sec: None,
        }
    }

    pub fn with_timing(mut self, duration_sec: f32, delay_sec: f32) -> Self {
        self.duration_sec = duration_sec.max(0.0);
        self.delay_sec = delay_sec.max(0.0);
        self
    }

    /// Start counting. Repeated triggers keep the running count.
    pub fn trigger(&mut self) {
        if self.elapsed_sec.is_none() {
            self.elapsed_sec = Some(0.0);
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.elapsed_sec.is_some()
    }

    pub fn tick(&mut self, dt_sec: f32) {
        if let Some(e) = self.elapsed_sec.as_mut() {
            if dt_sec.is_finite() && dt_sec > 0.0 {
                *e += dt_sec;
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.value() == self.target
    }

    pub fn value(&self) -> u32 {
        let Some(elapsed) = self.elapsed_sec else {
            return 0;
        };
        let t = elapsed - self.delay_sec;
        if t <= 0.0 {
            return 0;
        }
        if self.duration_sec == 0.0 || t >= self.duration_sec {
            return self.target;
        }
        let eased = Easing::EaseOut.apply(t / self.duration_sec);
        (eased * self.target as f32).round() as u32
    }

    pub fn display(&self) -> String {
        format!("{}{}", self.value(), self.suffix)
    }
}
