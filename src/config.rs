//! Game configuration: board dimensions, ship count, guess budget and markers.

use crate::common::BoardError;

pub const DEFAULT_WIDTH: usize = 5;
pub const DEFAULT_HEIGHT: usize = 5;
pub const DEFAULT_SHIPS: usize = 1;
pub const DEFAULT_GUESSES: u32 = 5;
/// Invalid answers tolerated per prompt before the terminal input gives up.
pub const DEFAULT_INPUT_ATTEMPTS: u32 = 10;

/// Display symbols used when rendering the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Markers {
    pub blank: char,
    pub miss: char,
    pub ship: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            blank: 'O',
            miss: 'X',
            ship: 'S',
        }
    }
}

/// Immutable settings for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub ship_count: usize,
    /// Number of rounds allowed before the game ends without a winner.
    pub guesses: u32,
    pub markers: Markers,
    /// `None` re-prompts forever.
    pub input_attempts: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ship_count: DEFAULT_SHIPS,
            guesses: DEFAULT_GUESSES,
            markers: Markers::default(),
            input_attempts: Some(DEFAULT_INPUT_ATTEMPTS),
        }
    }
}

impl GameConfig {
    /// Number of addressable cells on the grid, or `None` if it overflows.
    pub fn cell_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Check that the board can be built and hold `ship_count` ships.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.width == 0 || self.height == 0 {
            return Err(BoardError::InvalidDimensions);
        }
        let available = self.cell_count().ok_or(BoardError::InvalidDimensions)?;
        if self.ship_count > available {
            return Err(BoardError::CapacityExceeded {
                requested: self.ship_count,
                available,
            });
        }
        Ok(())
    }
}

