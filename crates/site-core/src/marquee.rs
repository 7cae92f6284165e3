use crate::clock::LoopClock;
use crate::config::MarqueeConfig;
use crate::constants::CAROUSEL_COPIES;
use crate::error::Result;

/// Non-interactive logo strip that scrolls left at constant speed.
///
/// Tiles are laid out three times; the strip travels one cycle per loop and
/// jumps back to zero, which is invisible because the next copy is identical.
#[derive(Clone, Debug)]
pub struct Marquee {
    tile_count: usize,
    tile_width_px: f32,
    clock: LoopClock,
}

impl Marquee {
    pub fn new(tile_count: usize, config: MarqueeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tile_count,
            tile_width_px: config.tile_width_px,
            clock: LoopClock::new(config.loop_duration_sec)?,
        })
    }

    pub fn cycle_width(&self) -> f32 {
        self.tile_count as f32 * self.tile_width_px
    }

    pub fn physical_tiles(&self) -> usize {
        self.tile_count * CAROUSEL_COPIES
    }

    pub fn tick(&mut self, dt_sec: f32) {
        self.clock.advance(dt_sec);
    }

    /// Current translation in pixels, in `(-cycle_width, 0]`.
    pub fn offset(&self) -> f32 {
        -self.clock.fraction() * self.cycle_width()
    }
}
