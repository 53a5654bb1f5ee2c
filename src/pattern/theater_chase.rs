//! Theater marquee chase
//!
//! Every third pixel is lit with the primary color and the lit pixels crawl
//! along the strip, the rest show the background color.

use super::Pattern;
use crate::{color::Rgb, error::ConfigError, progress::Progress, strip::PixelStrip};

const SPACING: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TheaterChase {
    /// Color of the running lights
    pub color1: Rgb,
    /// Background color
    pub color2: Rgb,
}

impl TheaterChase {
    pub const fn new(color1: Rgb, color2: Rgb) -> Self {
        Self { color1, color2 }
    }
}

impl Pattern for TheaterChase {
    fn total_steps(&self, pixel_count: usize) -> Result<usize, ConfigError> {
        Ok(pixel_count)
    }

    fn render<S: PixelStrip>(&self, progress: &Progress, strip: &mut S) {
        for i in 0..strip.pixel_count() {
            let color = if (i + progress.index()) % SPACING == 0 {
                self.color1
            } else {
                self.color2
            };
            strip.set_pixel(i, color);
        }
    }
}
