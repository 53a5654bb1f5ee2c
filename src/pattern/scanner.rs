//! Scanner
//!
//! A single bright pixel bounces between both ends of the strip, leaving a
//! trail that halves in brightness on every step. The trail is read back
//! from the strip buffer, so each frame builds on the previous one.

use super::Pattern;
use crate::{
    color::{Rgb, dim},
    error::ConfigError,
    progress::Progress,
    strip::PixelStrip,
};

/// Shortest strip a scanner can bounce on
pub const MIN_SCANNER_PIXELS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanner {
    pub color: Rgb,
}

impl Scanner {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Pattern for Scanner {
    fn total_steps(&self, pixel_count: usize) -> Result<usize, ConfigError> {
        if pixel_count < MIN_SCANNER_PIXELS {
            return Err(ConfigError::TooFewPixels {
                required: MIN_SCANNER_PIXELS,
                actual: pixel_count,
            });
        }
        // Out to the last pixel and back, without repeating either end
        Ok((pixel_count - 1) * 2)
    }

    fn render<S: PixelStrip>(&self, progress: &Progress, strip: &mut S) {
        let index = progress.index();
        let mirrored = progress.total_steps() - index;
        for i in 0..strip.pixel_count() {
            if i == index || i == mirrored {
                strip.set_pixel(i, self.color);
            } else {
                let trail = dim(strip.pixel(i));
                strip.set_pixel(i, trail);
            }
        }
    }
}
