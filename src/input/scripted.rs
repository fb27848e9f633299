use alloc::collections::VecDeque;
use alloc::vec::Vec;

use super::Input;
use crate::common::InputError;

/// Replays a fixed list of answers.
///
/// Coordinates outside the requested bounds are skipped, the same way a
/// terminal player would be re-prompted. Running out of answers yields
/// [`InputError::Closed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    players: Option<usize>,
    coords: VecDeque<(usize, usize)>,
}

impl ScriptedInput {
    pub fn new(coords: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self {
            players: None,
            coords: coords.into_iter().collect(),
        }
    }

    /// Answer the player-count question with `n`.
    pub fn with_players(mut self, n: usize) -> Self {
        self.players = Some(n);
        self
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> Vec<(usize, usize)> {
        self.coords.iter().copied().collect()
    }
}

impl Input for ScriptedInput {
    fn request_player_count(&mut self) -> Result<usize, InputError> {
        match self.players {
            Some(n) if n >= 1 => Ok(n),
            _ => Err(InputError::Closed),
        }
    }

    fn request_coordinate(
        &mut self,
        max_x: usize,
        max_y: usize,
    ) -> Result<(usize, usize), InputError> {
        while let Some((x, y)) = self.coords.pop_front() {
            if x <= max_x && y <= max_y {
                return Ok((x, y));
            }
            log::warn!("skipping scripted guess ({}, {}) outside bounds", x, y);
        }
        Err(InputError::Closed)
    }
}

