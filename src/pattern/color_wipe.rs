//! Color wipe
//!
//! Paints one more pixel per step and leaves the rest of the buffer alone,
//! so the color spreads over whatever was shown before.

use super::Pattern;
use crate::{color::Rgb, error::ConfigError, progress::Progress, strip::PixelStrip};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorWipe {
    pub color: Rgb,
}

impl ColorWipe {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Pattern for ColorWipe {
    fn total_steps(&self, pixel_count: usize) -> Result<usize, ConfigError> {
        Ok(pixel_count)
    }

    fn render<S: PixelStrip>(&self, progress: &Progress, strip: &mut S) {
        strip.set_pixel(progress.index(), self.color);
    }
}
