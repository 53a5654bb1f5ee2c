//! Rainbow cycling pattern
//!
//! Spreads the full color wheel across the strip once and rotates it by one
//! wheel position per step.

use super::Pattern;
use crate::{color::wheel, error::ConfigError, progress::Progress, strip::PixelStrip};

/// Number of steps in one rainbow cycle
pub const RAINBOW_STEPS: usize = 255;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RainbowCycle;

impl RainbowCycle {
    /// Wheel position of `pixel` on a strip of `pixel_count` pixels at `index`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hue(pixel: usize, pixel_count: usize, index: usize) -> u8 {
        let offset = if pixel_count == 0 {
            0
        } else {
            pixel * 256 / pixel_count
        };
        ((offset + index) & 255) as u8
    }
}

impl Pattern for RainbowCycle {
    fn total_steps(&self, _pixel_count: usize) -> Result<usize, ConfigError> {
        Ok(RAINBOW_STEPS)
    }

    fn render<S: PixelStrip>(&self, progress: &Progress, strip: &mut S) {
        let count = strip.pixel_count();
        for i in 0..count {
            strip.set_pixel(i, wheel(Self::hue(i, count, progress.index())));
        }
    }
}
