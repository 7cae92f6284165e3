use crate::config::validate_period;
use crate::error::Result;

/// Fixed-period phase accumulator driving every looping animation on the page.
///
/// The phase stays in `[0, period)` so long-running pages never lose precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopClock {
    period_sec: f32,
    phase_sec: f32,
}

impl LoopClock {
    pub fn new(period_sec: f32) -> Result<Self> {
        validate_period("loop period", period_sec)?;
        Ok(Self {
            period_sec,
            phase_sec: 0.0,
        })
    }

    pub fn period(&self) -> f32 {
        self.period_sec
    }

    pub fn phase(&self) -> f32 {
        self.phase_sec
    }

    /// Position within the current loop, in \[0, 1).
    pub fn fraction(&self) -> f32 {
        (self.phase_sec / self.period_sec).clamp(0.0, 1.0 - f32::EPSILON)
    }

    pub fn advance(&mut self, dt_sec: f32) {
        if !dt_sec.is_finite() || dt_sec <= 0.0 {
            return;
        }
        self.phase_sec = (self.phase_sec + dt_sec).rem_euclid(self.period_sec);
    }

    pub fn reset(&mut self) {
        self.phase_sec = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_after_one_period() {
        let mut c = LoopClock::new(20.0).unwrap();
        c.advance(15.0);
        assert!((c.fraction() - 0.75).abs() < 1e-6);
        c.advance(10.0);
        assert!((c.phase() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn ignores_bad_deltas() {
        let mut c = LoopClock::new(1.0).unwrap();
        c.advance(0.25);
        c.advance(-1.0);
        c.advance(f32::NAN);
        c.advance(f32::INFINITY);
        assert!((c.phase() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn rejects_non_positive_period() {
        assert!(LoopClock::new(0.0).is_err());
        assert!(LoopClock::new(-2.0).is_err());
        assert!(LoopClock::new(f32::NAN).is_err());
    }
}
