use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::error::ConfigError;
use crate::pattern::{PatternConfig, PatternKind, PatternSlot};
use crate::progress::{Direction, Progress};
use crate::strip::PixelStrip;

/// Result of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameResult {
    /// A frame was rendered and shown
    pub rendered: bool,
    /// The rendered frame ended a cycle and the completion callback ran
    ///
    /// Lets the caller react to the end of a cycle once the engine is
    /// free again, e.g. to reverse or reconfigure it.
    pub cycle_complete: bool,
}

/// Currently running pattern together with its pacing and position
#[derive(Debug, Clone, Copy)]
struct Animation {
    slot: PatternSlot,
    progress: Progress,
    interval: Duration,
}

/// Pattern Engine - drives one animation on one strip
///
/// Call [`PatternEngine::tick`] from the main loop. A frame is rendered only
/// once the configured interval has elapsed since the previous frame, and
/// the completion callback runs inline every time a cycle wraps.
pub struct PatternEngine<S: PixelStrip, C: FnMut() = fn()> {
    // External dependencies
    strip: S,
    on_complete: Option<C>,

    // Internal state
    active: Option<Animation>,
    last_update: Instant,
}

impl<S: PixelStrip> PatternEngine<S> {
    /// Create an idle engine without a completion callback
    pub const fn new(strip: S) -> Self {
        Self {
            strip,
            on_complete: None,
            active: None,
            last_update: Instant::from_millis(0),
        }
    }
}

impl<S: PixelStrip, C: FnMut()> PatternEngine<S, C> {
    /// Create an idle engine that calls `on_complete` at the end of every cycle
    pub const fn with_on_complete(strip: S, on_complete: C) -> Self {
        Self {
            strip,
            on_complete: Some(on_complete),
            active: None,
            last_update: Instant::from_millis(0),
        }
    }

    /// Start a pattern
    ///
    /// Replaces the running pattern and rewinds to the first step of the new
    /// one. Nothing is rendered until the next due tick.
    pub fn configure(&mut self, config: PatternConfig) -> Result<(), ConfigError> {
        let slot = config.to_slot();
        let total_steps = slot.total_steps(self.strip.pixel_count())?;
        let progress = Progress::new(total_steps, config.direction())?;

        #[cfg(feature = "esp32-log")]
        println!(
            "[PatternEngine.configure] {} with {} steps every {}ms",
            slot.kind().as_str(),
            total_steps,
            config.interval().as_millis()
        );

        self.active = Some(Animation {
            slot,
            progress,
            interval: config.interval(),
        });
        Ok(())
    }

    /// Cycle the full color wheel along the strip
    pub fn configure_rainbow_cycle(
        &mut self,
        interval: Duration,
        direction: Direction,
    ) -> Result<(), ConfigError> {
        self.configure(PatternConfig::RainbowCycle {
            interval,
            direction,
        })
    }

    /// Crawl every third pixel in `color1` over a `color2` background
    pub fn configure_theater_chase(
        &mut self,
        color1: Rgb,
        color2: Rgb,
        interval: Duration,
        direction: Direction,
    ) -> Result<(), ConfigError> {
        self.configure(PatternConfig::TheaterChase {
            color1,
            color2,
            interval,
            direction,
        })
    }

    /// Paint the strip pixel by pixel
    pub fn configure_color_wipe(
        &mut self,
        color: Rgb,
        interval: Duration,
        direction: Direction,
    ) -> Result<(), ConfigError> {
        self.configure(PatternConfig::ColorWipe {
            color,
            interval,
            direction,
        })
    }

    /// Bounce a single pixel back and forth with a fading trail
    ///
    /// Requires a strip of at least two pixels.
    pub fn configure_scanner(&mut self, color: Rgb, interval: Duration) -> Result<(), ConfigError> {
        self.configure(PatternConfig::Scanner { color, interval })
    }

    /// Fade the whole strip from `color1` towards `color2` over `steps` frames
    pub fn configure_fade(
        &mut self,
        color1: Rgb,
        color2: Rgb,
        steps: u16,
        interval: Duration,
        direction: Direction,
    ) -> Result<(), ConfigError> {
        self.configure(PatternConfig::Fade {
            color1,
            color2,
            steps,
            interval,
            direction,
        })
    }

    /// Stop the running pattern, leaving the strip as it is
    pub fn stop(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[PatternEngine.stop] stopping {}", self.active_pattern().as_str());
        self.active = None;
    }

    /// Render the next frame if it is due
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let Some(animation) = self.active.as_mut() else {
            return FrameResult::default();
        };
        if now.saturating_duration_since(self.last_update) < animation.interval {
            return FrameResult::default();
        }
        self.last_update = now;

        animation.slot.render(&animation.progress, &mut self.strip);
        self.strip.show();

        let cycle_complete = animation.progress.advance();
        if cycle_complete {
            #[cfg(feature = "esp32-log")]
            println!(
                "[PatternEngine.tick] {} cycle complete",
                animation.slot.kind().as_str()
            );
            if let Some(on_complete) = self.on_complete.as_mut() {
                on_complete();
            }
        }
        FrameResult {
            rendered: true,
            cycle_complete,
        }
    }

    /// Flip the direction of the running pattern
    ///
    /// Switching to reverse jumps to the last step, switching to forward
    /// jumps to the first one.
    pub fn reverse_direction(&mut self) {
        if let Some(animation) = self.active.as_mut() {
            animation.progress.reverse();
        }
    }

    /// Set every pixel to `color` and show it right away
    ///
    /// A running pattern keeps going and overwrites the strip on its next
    /// frame.
    pub fn fill(&mut self, color: Rgb) {
        for i in 0..self.strip.pixel_count() {
            self.strip.set_pixel(i, color);
        }
        self.strip.show();
    }

    /// Earliest instant at which [`Self::tick`] renders again
    ///
    /// Returns `None` when no pattern is running. Saturates at
    /// [`Instant::MAX`] for intervals reaching past the end of time.
    pub fn next_update(&self) -> Option<Instant> {
        self.active.as_ref().map(|animation| {
            self.last_update
                .checked_add(animation.interval)
                .unwrap_or(Instant::MAX)
        })
    }

    /// Kind of the running pattern, `PatternKind::None` when idle
    pub fn active_pattern(&self) -> PatternKind {
        self.active
            .as_ref()
            .map_or(PatternKind::None, |animation| animation.slot.kind())
    }

    /// Running pattern with its parameters
    pub fn pattern(&self) -> Option<&PatternSlot> {
        self.active.as_ref().map(|animation| &animation.slot)
    }

    /// Direction of the running pattern
    pub fn direction(&self) -> Option<Direction> {
        self.active
            .as_ref()
            .map(|animation| animation.progress.direction())
    }

    /// Current step of the running pattern
    pub fn index(&self) -> Option<usize> {
        self.active.as_ref().map(|animation| animation.progress.index())
    }

    /// Length of one cycle of the running pattern
    pub fn total_steps(&self) -> Option<usize> {
        self.active
            .as_ref()
            .map(|animation| animation.progress.total_steps())
    }

    /// Minimum time between frames of the running pattern
    pub fn interval(&self) -> Option<Duration> {
        self.active.as_ref().map(|animation| animation.interval)
    }

    /// Strip the engine renders into
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Mutable access to the strip, e.g. to clear it between patterns
    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    /// Consume the engine and hand back the strip
    pub fn into_strip(self) -> S {
        self.strip
    }
}
