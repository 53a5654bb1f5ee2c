//! Configuration errors
//!
//! Every failure is reported when a pattern or buffer is configured.
//! Rendering itself never fails.

use thiserror::Error;

/// Rejected pattern or buffer configuration
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The pattern would run a cycle of zero steps
    #[error("pattern cycle must have at least one step")]
    ZeroSteps,
    /// The strip is too short for the pattern
    #[error("pattern needs at least {required} pixels, strip has {actual}")]
    TooFewPixels { required: usize, actual: usize },
    /// The frame buffer cannot hold the requested number of pixels
    #[error("frame buffer holds {capacity} pixels, {requested} requested")]
    BufferTooSmall { requested: usize, capacity: usize },
}
