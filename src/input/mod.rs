//! Sources of player decisions.
//!
//! The game core only talks to the [`Input`] trait. Implementations:
//! - ScriptedInput: fixed queue of answers, for tests and replays
//! - RandomInput: seeded random guesses, used by the simulator
//! - TerminalInput: interactive prompts over any `BufRead`/`Write` pair

use crate::common::InputError;

/// Interface implemented by anything that can answer the game's questions.
///
/// Implementations must never return a coordinate outside
/// `[0, max_x] × [0, max_y]`.
pub trait Input {
    /// Number of players taking part. Always at least one.
    fn request_player_count(&mut self) -> Result<usize, InputError>;

    /// Next guess as `(x, y)`.
    fn request_coordinate(&mut self, max_x: usize, max_y: usize)
        -> Result<(usize, usize), InputError>;
}

pub mod random;
pub mod scripted;
pub use random::RandomInput;
pub use scripted::ScriptedInput;

#[cfg(feature = "std")]
pub mod terminal;
#[cfg(feature = "std")]
pub use terminal::TerminalInput;
