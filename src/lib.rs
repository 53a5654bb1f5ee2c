#![no_std]

pub mod color;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod progress;
pub mod strip;

pub use engine::{FrameResult, PatternEngine};
pub use error::ConfigError;
pub use pattern::{PatternConfig, PatternKind, PatternSlot};
pub use progress::{Direction, Progress};
pub use strip::{FrameBuffer, PixelStrip};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`FrameBuffer`] is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
