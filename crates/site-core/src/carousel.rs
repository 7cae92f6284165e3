//! Endless, draggable card strip.
//!
//! The N logical cards are laid out three times in a row. The strip is moved by
//! a single horizontal `offset` (pixels, negative = shifted left). While idle the
//! strip auto-scrolls at constant velocity; a drag freezes it, moves it freely,
//! and on release it settles on a snap-group boundary inside the middle copy so
//! the ends of the physical strip never come into view.

use crate::clock::LoopClock;
use crate::config::CarouselConfig;
use crate::constants::CAROUSEL_COPIES;
use crate::error::{Result, SiteError};

/// Content of one card. Icons are opaque references resolved by the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardContent {
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl CardContent {
    pub fn new(title: &str, description: &str, icon: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            icon: icon.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselPhase {
    /// No width measured yet; gestures and ticks are ignored.
    Uninitialized,
    AutoPlaying,
    Dragging,
}

#[derive(Clone, Debug)]
pub struct InfiniteCarousel {
    items: Vec<CardContent>,
    config: CarouselConfig,
    slide_width: f32,
    offset: f32,
    phase: CarouselPhase,
    // Offset the current auto-play loop started from, kept in the middle band.
    autoplay_anchor: f32,
    clock: LoopClock,
}

impl InfiniteCarousel {
    pub fn new(items: Vec<CardContent>, config: CarouselConfig) -> Result<Self> {
        if items.is_empty() {
            return Err(SiteError::EmptyItems);
        }
        config.validate()?;
        let clock = LoopClock::new(config.loop_duration_sec)?;
        Ok(Self {
            items,
            config,
            slide_width: 0.0,
            offset: 0.0,
            phase: CarouselPhase::Uninitialized,
            autoplay_anchor: 0.0,
            clock,
        })
    }

    pub fn items(&self) -> &[CardContent] {
        &self.items
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of physical slides in the strip.
    pub fn slide_count(&self) -> usize {
        self.items.len() * CAROUSEL_COPIES
    }

    /// Physical slides in strip order, paired with their logical card.
    pub fn slides(&self) -> impl Iterator<Item = (usize, &CardContent)> + '_ {
        self.items.iter().cycle().take(self.slide_count()).enumerate()
    }

    pub fn slide_width(&self) -> f32 {
        self.slide_width
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == CarouselPhase::Dragging
    }

    pub fn is_measured(&self) -> bool {
        self.slide_width > 0.0
    }

    /// Width of one pass through the logical items.
    pub fn cycle_width(&self) -> f32 {
        self.items.len() as f32 * self.slide_width
    }

    /// Logical card at the left edge of the viewport, once measured.
    pub fn visual_index(&self) -> Option<usize> {
        if !self.is_measured() {
            return None;
        }
        let pos = (-self.offset / self.slide_width).floor() as i64;
        Some(pos.rem_euclid(self.items.len() as i64) as usize)
    }

    /// Record the rendered width of the whole strip.
    ///
    /// The first non-zero measurement places the strip at the start of the
    /// middle copy and starts auto-play. Later measurements rescale the current
    /// position so the same cards stay in view.
    pub fn measure(&mut self, total_rendered_width: f32) {
        if !(total_rendered_width.is_finite() && total_rendered_width > 0.0) {
            log::warn!(
                "[carousel] ignoring measurement {}; waiting for layout",
                total_rendered_width
            );
            return;
        }
        let width = total_rendered_width / self.slide_count() as f32;
        if !self.is_measured() {
            self.slide_width = width;
            let start = -self.cycle_width();
            log::info!(
                "[carousel] measured slide_width={:.1} cycle={:.1}; auto-play from {:.1}",
                width,
                self.cycle_width(),
                start
            );
            self.start_autoplay(start);
            return;
        }
        if width == self.slide_width {
            return;
        }
        let scale = width / self.slide_width;
        self.slide_width = width;
        self.offset *= scale;
        self.autoplay_anchor *= scale;
        if self.phase == CarouselPhase::AutoPlaying {
            self.offset = self.autoplay_offset();
        }
        log::debug!("[carousel] resized slide_width={:.1}", width);
    }

    pub fn on_drag_start(&mut self) {
        match self.phase {
            CarouselPhase::AutoPlaying => {
                self.phase = CarouselPhase::Dragging;
                log::debug!("[carousel] drag start at {:.1}", self.offset);
            }
            CarouselPhase::Uninitialized => {
                log::warn!("[carousel] drag before first measurement ignored");
            }
            CarouselPhase::Dragging => {}
        }
    }

    /// Move the strip by a device-reported delta. No wraparound while dragging.
    pub fn on_drag_move(&mut self, delta: f32) {
        if self.phase != CarouselPhase::Dragging || !delta.is_finite() {
            return;
        }
        self.offset += delta;
    }

    /// Settle on the nearest snap-group boundary, pull it back into the middle
    /// band, and resume auto-play from there. Ignored unless a drag is active,
    /// so repeated calls leave the offset unchanged.
    pub fn on_drag_end(&mut self) {
        if self.phase != CarouselPhase::Dragging {
            return;
        }
        let released = self.offset;
        let settled = self.recenter(self.snap_point(released));
        log::debug!(
            "[carousel] drag end released={:.1} settled={:.1}",
            released,
            settled
        );
        self.offset = settled;
        self.start_autoplay(settled);
    }

    /// Advance auto-play by `dt_sec`. Does nothing while dragging or before the
    /// first measurement.
    pub fn tick(&mut self, dt_sec: f32) {
        if self.phase != CarouselPhase::AutoPlaying {
            return;
        }
        self.clock.advance(dt_sec);
        self.offset = self.autoplay_offset();
    }

    /// Nearest multiple of `slide_width * snap_group`, ties rounding up.
    pub fn snap_point(&self, offset: f32) -> f32 {
        if !self.is_measured() {
            return offset;
        }
        let step = self.slide_width * self.config.snap_group as f32;
        round_half_up(offset / step) * step
    }

    /// Shift by whole cycles until `x` lies in `[-2 * cycle, -cycle]`.
    pub fn recenter(&self, x: f32) -> f32 {
        let cycle = self.cycle_width();
        if cycle <= 0.0 || !x.is_finite() {
            return x;
        }
        if x > -cycle {
            let k = ((x + cycle) / cycle).ceil();
            x - k * cycle
        } else if x < -2.0 * cycle {
            let k = ((-2.0 * cycle - x) / cycle).ceil();
            x + k * cycle
        } else {
            x
        }
    }

    /// Map any offset onto the visually identical one in `(-2 * cycle, -cycle]`.
    pub fn normalize(&self, x: f32) -> f32 {
        let cycle = self.cycle_width();
        if cycle <= 0.0 || !x.is_finite() {
            return x;
        }
        let into = (-(x + cycle)).rem_euclid(cycle);
        // rem_euclid can round up to exactly `cycle` for tiny negative inputs
        -cycle - if into >= cycle { 0.0 } else { into }
    }

    fn start_autoplay(&mut self, from: f32) {
        self.autoplay_anchor = self.normalize(from);
        self.clock.reset();
        self.offset = self.autoplay_anchor;
        self.phase = CarouselPhase::AutoPlaying;
    }

    fn autoplay_offset(&self) -> f32 {
        self.normalize(self.autoplay_anchor - self.cycle_width() * self.clock.fraction())
    }
}

#[inline]
fn round_half_up(x: f32) -> f32 {
    (x + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_matches_browser_rounding() {
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(-1.6), -2.0);
        assert_eq!(round_half_up(1.5), 2.0);
        assert_eq!(round_half_up(0.49), 0.0);
    }
}
