//! Whole-strip fade between two colors

use super::Pattern;
use crate::{
    color::{Rgb, fade_color},
    error::ConfigError,
    progress::Progress,
    strip::PixelStrip,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    /// Color at the first step
    pub color1: Rgb,
    /// Color approached at the last step
    pub color2: Rgb,
    /// Number of steps in the fade
    pub steps: u16,
}

impl Fade {
    pub const fn new(color1: Rgb, color2: Rgb, steps: u16) -> Self {
        Self {
            color1,
            color2,
            steps,
        }
    }

    /// Color shown at the given progress
    pub fn color_at(&self, progress: &Progress) -> Rgb {
        fade_color(
            self.color1,
            self.color2,
            progress.index(),
            progress.total_steps(),
        )
    }
}

impl Pattern for Fade {
    fn total_steps(&self, _pixel_count: usize) -> Result<usize, ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        Ok(usize::from(self.steps))
    }

    fn render<S: PixelStrip>(&self, progress: &Progress, strip: &mut S) {
        let color = self.color_at(progress);
        for i in 0..strip.pixel_count() {
            strip.set_pixel(i, color);
        }
    }
}
