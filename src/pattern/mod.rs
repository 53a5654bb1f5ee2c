//! Pattern system with compile-time known pattern variants
//!
//! All patterns are stored in an enum to avoid heap allocations.
//! Each pattern implements the `Pattern` trait.

mod color_wipe;
mod fade;
mod rainbow_cycle;
mod scanner;
mod theater_chase;

use embassy_time::Duration;

pub use color_wipe::ColorWipe;
pub use fade::Fade;
pub use rainbow_cycle::{RAINBOW_STEPS, RainbowCycle};
pub use scanner::{MIN_SCANNER_PIXELS, Scanner};
pub use theater_chase::TheaterChase;

use crate::{
    color::Rgb,
    error::ConfigError,
    progress::{Direction, Progress},
    strip::PixelStrip,
};

const PATTERN_NAME_NONE: &str = "none";
const PATTERN_NAME_RAINBOW_CYCLE: &str = "rainbow_cycle";
const PATTERN_NAME_THEATER_CHASE: &str = "theater_chase";
const PATTERN_NAME_COLOR_WIPE: &str = "color_wipe";
const PATTERN_NAME_SCANNER: &str = "scanner";
const PATTERN_NAME_FADE: &str = "fade";

const PATTERN_ID_NONE: u8 = 0;
const PATTERN_ID_RAINBOW_CYCLE: u8 = 1;
const PATTERN_ID_THEATER_CHASE: u8 = 2;
const PATTERN_ID_COLOR_WIPE: u8 = 3;
const PATTERN_ID_SCANNER: u8 = 4;
const PATTERN_ID_FADE: u8 = 5;

pub trait Pattern {
    /// Length of one cycle on a strip of `pixel_count` pixels
    ///
    /// Fails if the pattern cannot run on such a strip.
    fn total_steps(&self, pixel_count: usize) -> Result<usize, ConfigError>;

    /// Render the frame for `progress` into the strip buffer
    ///
    /// Does not show the frame.
    fn render<S: PixelStrip>(&self, progress: &Progress, strip: &mut S);
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSlot {
    /// Rotating rainbow across the whole strip
    RainbowCycle(RainbowCycle),
    /// Marquee lights crawling over a background color
    TheaterChase(TheaterChase),
    /// Progressive fill with a single color
    ColorWipe(ColorWipe),
    /// Bouncing pixel with a fading trail
    Scanner(Scanner),
    /// Whole-strip fade between two colors
    Fade(Fade),
}

/// Known pattern ids that can be requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternKind {
    #[default]
    None = PATTERN_ID_NONE,
    RainbowCycle = PATTERN_ID_RAINBOW_CYCLE,
    TheaterChase = PATTERN_ID_THEATER_CHASE,
    ColorWipe = PATTERN_ID_COLOR_WIPE,
    Scanner = PATTERN_ID_SCANNER,
    Fade = PATTERN_ID_FADE,
}

impl PatternKind {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_NONE => Self::None,
            PATTERN_ID_RAINBOW_CYCLE => Self::RainbowCycle,
            PATTERN_ID_THEATER_CHASE => Self::TheaterChase,
            PATTERN_ID_COLOR_WIPE => Self::ColorWipe,
            PATTERN_ID_SCANNER => Self::Scanner,
            PATTERN_ID_FADE => Self::Fade,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => PATTERN_NAME_NONE,
            Self::RainbowCycle => PATTERN_NAME_RAINBOW_CYCLE,
            Self::TheaterChase => PATTERN_NAME_THEATER_CHASE,
            Self::ColorWipe => PATTERN_NAME_COLOR_WIPE,
            Self::Scanner => PATTERN_NAME_SCANNER,
            Self::Fade => PATTERN_NAME_FADE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_NONE => Some(Self::None),
            PATTERN_NAME_RAINBOW_CYCLE => Some(Self::RainbowCycle),
            PATTERN_NAME_THEATER_CHASE => Some(Self::TheaterChase),
            PATTERN_NAME_COLOR_WIPE => Some(Self::ColorWipe),
            PATTERN_NAME_SCANNER => Some(Self::Scanner),
            PATTERN_NAME_FADE => Some(Self::Fade),
            _ => None,
        }
    }
}

impl PatternSlot {
    /// Length of one cycle on a strip of `pixel_count` pixels
    pub fn total_steps(&self, pixel_count: usize) -> Result<usize, ConfigError> {
        match self {
            Self::RainbowCycle(pattern) => pattern.total_steps(pixel_count),
            Self::TheaterChase(pattern) => pattern.total_steps(pixel_count),
            Self::ColorWipe(pattern) => pattern.total_steps(pixel_count),
            Self::Scanner(pattern) => pattern.total_steps(pixel_count),
            Self::Fade(pattern) => pattern.total_steps(pixel_count),
        }
    }

    /// Render the current pattern
    pub fn render<S: PixelStrip>(&self, progress: &Progress, strip: &mut S) {
        match self {
            Self::RainbowCycle(pattern) => pattern.render(progress, strip),
            Self::TheaterChase(pattern) => pattern.render(progress, strip),
            Self::ColorWipe(pattern) => pattern.render(progress, strip),
            Self::Scanner(pattern) => pattern.render(progress, strip),
            Self::Fade(pattern) => pattern.render(progress, strip),
        }
    }

    /// Get the pattern kind for external observation
    pub fn kind(&self) -> PatternKind {
        match self {
            Self::RainbowCycle(_) => PatternKind::RainbowCycle,
            Self::TheaterChase(_) => PatternKind::TheaterChase,
            Self::ColorWipe(_) => PatternKind::ColorWipe,
            Self::Scanner(_) => PatternKind::Scanner,
            Self::Fade(_) => PatternKind::Fade,
        }
    }
}

/// Complete description of a pattern to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternConfig {
    RainbowCycle {
        interval: Duration,
        direction: Direction,
    },
    TheaterChase {
        color1: Rgb,
        color2: Rgb,
        interval: Duration,
        direction: Direction,
    },
    ColorWipe {
        color: Rgb,
        interval: Duration,
        direction: Direction,
    },
    /// Scanner always runs forward
    Scanner { color: Rgb, interval: Duration },
    Fade {
        color1: Rgb,
        color2: Rgb,
        steps: u16,
        interval: Duration,
        direction: Direction,
    },
}

impl PatternConfig {
    pub const fn kind(&self) -> PatternKind {
        match self {
            Self::RainbowCycle { .. } => PatternKind::RainbowCycle,
            Self::TheaterChase { .. } => PatternKind::TheaterChase,
            Self::ColorWipe { .. } => PatternKind::ColorWipe,
            Self::Scanner { .. } => PatternKind::Scanner,
            Self::Fade { .. } => PatternKind::Fade,
        }
    }

    /// Minimum time between two rendered frames
    pub const fn interval(&self) -> Duration {
        match *self {
            Self::RainbowCycle { interval, .. }
            | Self::TheaterChase { interval, .. }
            | Self::ColorWipe { interval, .. }
            | Self::Scanner { interval, .. }
            | Self::Fade { interval, .. } => interval,
        }
    }

    /// Direction the pattern starts in
    pub const fn direction(&self) -> Direction {
        match *self {
            Self::RainbowCycle { direction, .. }
            | Self::TheaterChase { direction, .. }
            | Self::ColorWipe { direction, .. }
            | Self::Fade { direction, .. } => direction,
            Self::Scanner { .. } => Direction::Forward,
        }
    }

    pub const fn to_slot(&self) -> PatternSlot {
        match *self {
            Self::RainbowCycle { .. } => PatternSlot::RainbowCycle(RainbowCycle),
            Self::TheaterChase { color1, color2, .. } => {
                PatternSlot::TheaterChase(TheaterChase::new(color1, color2))
            }
            Self::ColorWipe { color, .. } => PatternSlot::ColorWipe(ColorWipe::new(color)),
            Self::Scanner { color, .. } => PatternSlot::Scanner(Scanner::new(color)),
            Self::Fade {
                color1,
                color2,
                steps,
                ..
            } => PatternSlot::Fade(Fade::new(color1, color2, steps)),
        }
    }
}
