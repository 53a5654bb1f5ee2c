use crate::error::ConfigError;

/// Direction in which a pattern steps through its cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    /// Returns the opposite direction
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

/// Position within one animation cycle
///
/// `index` always stays in `0..total_steps` and `total_steps` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    index: usize,
    total_steps: usize,
    direction: Direction,
}

impl Progress {
    /// Create progress positioned at the starting boundary for `direction`
    pub const fn new(total_steps: usize, direction: Direction) -> Result<Self, ConfigError> {
        if total_steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        Ok(Self {
            index: Self::start_index(total_steps, direction),
            total_steps,
            direction,
        })
    }

    /// Current step within the cycle
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of steps in one cycle
    pub const fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Move one step in the current direction
    ///
    /// Returns `true` when the index wrapped around, which marks the end
    /// of a full cycle.
    pub fn advance(&mut self) -> bool {
        match self.direction {
            Direction::Forward => {
                self.index += 1;
                if self.index >= self.total_steps {
                    self.index = 0;
                    return true;
                }
                false
            }
            Direction::Reverse => {
                if self.index == 0 {
                    self.index = self.total_steps - 1;
                    return true;
                }
                self.index -= 1;
                false
            }
        }
    }

    /// Flip the direction and jump to the new direction's starting boundary
    pub fn reverse(&mut self) {
        self.direction = self.direction.toggled();
        self.index = Self::start_index(self.total_steps, self.direction);
    }

    const fn start_index(total_steps: usize, direction: Direction) -> usize {
        match direction {
            Direction::Forward => 0,
            Direction::Reverse => total_steps - 1,
        }
    }
}
