//! Recognized options for the site's animated components.

use crate::constants::{
    CAROUSEL_LOOP_SEC, MARQUEE_LOOP_SEC, MARQUEE_TILE_WIDTH_PX, REVEAL_THRESHOLD,
    SNAP_GROUP_CARDS,
};
use crate::error::{Result, SiteError};
use crate::Lens;

/// Options for [`crate::InfiniteCarousel`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Consecutive cards treated as one unit when a drag settles.
    pub snap_group: usize,
    /// Seconds to auto-scroll through one full cycle of items.
    pub loop_duration_sec: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            snap_group: SNAP_GROUP_CARDS,
            loop_duration_sec: CAROUSEL_LOOP_SEC,
        }
    }
}

impl CarouselConfig {
    pub fn with_snap_group(mut self, snap_group: usize) -> Self {
        self.snap_group = snap_group;
        self
    }

    pub fn with_loop_duration(mut self, seconds: f32) -> Self {
        self.loop_duration_sec = seconds;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.snap_group == 0 {
            return Err(SiteError::InvalidConfig(
                "snap group must contain at least one card".into(),
            ));
        }
        validate_period("carousel loop duration", self.loop_duration_sec)
    }
}

/// Options for the trust-bar [`crate::Marquee`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeConfig {
    pub loop_duration_sec: f32,
    pub tile_width_px: f32,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            loop_duration_sec: MARQUEE_LOOP_SEC,
            tile_width_px: MARQUEE_TILE_WIDTH_PX,
        }
    }
}

impl MarqueeConfig {
    pub fn validate(&self) -> Result<()> {
        validate_period("marquee loop duration", self.loop_duration_sec)?;
        if !(self.tile_width_px.is_finite() && self.tile_width_px > 0.0) {
            return Err(SiteError::InvalidConfig(format!(
                "marquee tile width must be positive, got {}",
                self.tile_width_px
            )));
        }
        Ok(())
    }
}

/// Everything the frontend needs to build the reference site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub marquee: MarqueeConfig,
    pub reveal_threshold: f32,
    pub lens: Lens,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            marquee: MarqueeConfig::default(),
            reveal_threshold: REVEAL_THRESHOLD,
            lens: Lens::default(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<()> {
        self.carousel.validate()?;
        self.marquee.validate()?;
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(SiteError::InvalidConfig(format!(
                "reveal threshold must lie in [0, 1], got {}",
                self.reveal_threshold
            )));
        }
        self.lens.validate()
    }
}

pub(crate) fn validate_period(what: &str, seconds: f32) -> Result<()> {
    if seconds.is_finite() && seconds > 0.0 {
        Ok(())
    } else {
        Err(SiteError::InvalidConfig(format!(
            "{what} must be a positive number of seconds, got {seconds}"
        )))
    }
}
