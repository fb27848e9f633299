//! Game output: progress messages and grid rendering.

use crate::config::Markers;
use crate::game::{Outcome, Player};
use crate::grid::Grid;

/// Receives everything the game wants to show. Nothing is returned to the core.
pub trait View {
    /// Called at the start of each round.
    fn remaining_guesses(&mut self, _guesses: u32) {}

    /// Called before `player` is asked for a guess.
    fn turn(&mut self, _player: &Player) {}

    /// Called after each processed guess.
    fn render(&mut self, grid: &Grid, markers: &Markers);

    /// Called once when the game is over.
    fn outcome(&mut self, _outcome: &Outcome) {}
}

/// [`View`] that shows nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl View for NullView {
    fn render(&mut self, _grid: &Grid, _markers: &Markers) {}
}

#[cfg(feature = "std")]
pub use terminal::TerminalView;

#[cfg(feature = "std")]
mod terminal {
    use std::io::Write;

    use super::View;
    use crate::config::Markers;
    use crate::game::{Outcome, Player};
    use crate::grid::Grid;

    /// Plain text output to any writer (normally stdout).
    pub struct TerminalView<W: Write> {
        writer: W,
    }

    impl<W: Write> TerminalView<W> {
        pub fn new(writer: W) -> Self {
            Self { writer }
        }

        pub fn into_inner(self) -> W {
            self.writer
        }

        fn emit(&mut self, args: std::fmt::Arguments<'_>) {
            // a closed stdout must not abort the game
            if let Err(e) = self.writer.write_fmt(args) {
                log::warn!("failed to write output: {}", e);
            }
        }
    }

    impl<W: Write> View for TerminalView<W> {
        fn remaining_guesses(&mut self, guesses: u32) {
            self.emit(format_args!("{} guesses remaining!\n", guesses));
        }

        fn turn(&mut self, player: &Player) {
            self.emit(format_args!("{}'s turn to guess!\n", player.name()));
        }

        fn render(&mut self, grid: &Grid, markers: &Markers) {
            self.emit(format_args!("{}", grid.display(markers)));
        }

        fn outcome(&mut self, outcome: &Outcome) {
            match &outcome.winner {
                Some(name) => self.emit(format_args!("{} won the game!\n", name)),
                None => self.emit(format_args!("Nobody won the game!\n")),
            }
        }
    }
}
