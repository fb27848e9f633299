//! Common types: grid cells, board errors and input errors.

use alloc::string::String;

/// State of a single grid cell, rendered through [`crate::Markers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Blank,
    Miss,
    Ship,
}

/// Result of applying one guess to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// The guess sank the ship at that coordinate.
    Hit,
    /// No ship sits at the guessed coordinate.
    Miss,
}

/// Errors returned while building a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Ship coordinate lies beyond the board.
    OutOfBounds { x: usize, y: usize },
    /// A ship already occupies this coordinate.
    DuplicatePlacement { x: usize, y: usize },
    /// More distinct coordinates requested than the space holds.
    CapacityExceeded { requested: usize, available: usize },
    /// Width or height is zero.
    InvalidDimensions,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => write!(f, "Outside the grid: ({}, {})", x, y),
            BoardError::DuplicatePlacement { x, y } => {
                write!(f, "A ship is already placed at ({}, {})", x, y)
            }
            BoardError::CapacityExceeded {
                requested,
                available,
            } => write!(
                f,
                "Cannot place {} ships on a board with {} cells",
                requested, available
            ),
            BoardError::InvalidDimensions => write!(f, "Board dimensions must be positive"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by an [`crate::Input`] source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The player gave this many invalid answers in a row.
    Exhausted { attempts: u32 },
    /// The input stream ended.
    Closed,
    /// Underlying I/O failure.
    Io(String),
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::Exhausted { attempts } => {
                write!(f, "Gave up after {} invalid answers", attempts)
            }
            InputError::Closed => write!(f, "Input closed"),
            InputError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(std::string::ToString::to_string(&err))
    }
}
