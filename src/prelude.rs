//! Commonly used types and utilities for ease of import.

pub use crate::{
    generate_unique_coordinates, make_players, new_board, Board, Game, GameConfig, GameStatus,
    Input, Outcome, Player, ScriptedInput, View,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, TerminalInput, TerminalView};
