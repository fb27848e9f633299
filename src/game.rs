//! Turn rotation, guess budget and termination.

use alloc::string::String;
use alloc::vec::Vec;

use crate::board::Board;
use crate::common::InputError;
use crate::config::Markers;
use crate::input::Input;
use crate::ui::View;

/// A participant, identified by display name only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// A guess sank the last ship.
    Won,
    /// The guess budget ran out first.
    NoWinner,
}

/// Final result of [`Game::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub winner: Option<String>,
    pub rounds_played: u32,
    pub guesses_remaining: u32,
}

/// Shared board, players in turn order and the round-scoped guess budget.
pub struct Game {
    board: Board,
    players: Vec<Player>,
    guesses: u32,
    markers: Markers,
    /// Index into `players`.
    winner: Option<usize>,
    rounds_played: u32,
}

impl Game {
    pub fn new(board: Board, players: Vec<Player>, guesses: u32) -> Self {
        Self {
            board,
            players,
            guesses,
            markers: Markers::default(),
            winner: None,
            rounds_played: 0,
        }
    }

    /// Use `markers` when handing the grid to a [`View`].
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn guesses_remaining(&self) -> u32 {
        self.guesses
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|i| &self.players[i])
    }

    /// No guesses left, or every ship sunk.
    pub fn is_finished(&self) -> bool {
        self.guesses == 0 || self.board.all_sunk()
    }

    pub fn status(&self) -> GameStatus {
        if !self.is_finished() {
            GameStatus::InProgress
        } else if self.winner.is_some() {
            GameStatus::Won
        } else {
            GameStatus::NoWinner
        }
    }

    /// Give each player one guess in order, then spend one guess from the budget.
    ///
    /// Players after the one who finishes the game get no turn this round.
    pub fn play_round<I, V>(&mut self, input: &mut I, view: &mut V) -> Result<(), InputError>
    where
        I: Input + ?Sized,
        V: View + ?Sized,
    {
        view.remaining_guesses(self.guesses);
        for idx in 0..self.players.len() {
            if self.is_finished() {
                continue;
            }
            view.turn(&self.players[idx]);
            let (x, y) =
                input.request_coordinate(self.board.width() - 1, self.board.height() - 1)?;
            self.board.process_guess(x, y);
            view.render(self.board.grid(), &self.markers);
            if self.is_finished() {
                self.winner = Some(idx);
            }
        }
        self.guesses = self.guesses.saturating_sub(1);
        self.rounds_played += 1;
        Ok(())
    }

    /// Play rounds until the game is finished and report the outcome.
    pub fn play<I, V>(&mut self, input: &mut I, view: &mut V) -> Result<Outcome, InputError>
    where
        I: Input + ?Sized,
        V: View + ?Sized,
    {
        while !self.is_finished() {
            self.play_round(input, view)?;
        }
        let outcome = Outcome {
            winner: self.winner().map(|p| String::from(p.name())),
            rounds_played: self.rounds_played,
            guesses_remaining: self.guesses,
        };
        match &outcome.winner {
            Some(name) => log::info!("{} won after {} rounds", name, outcome.rounds_played),
            None => log::info!("no winner after {} rounds", outcome.rounds_played),
        }
        view.outcome(&outcome);
        Ok(outcome)
    }
}
