use rand::Rng;

use super::Input;
use crate::common::InputError;

/// Guesses uniformly at random; used by the simulator.
pub struct RandomInput<R: Rng> {
    rng: R,
    players: usize,
}

impl<R: Rng> RandomInput<R> {
    pub fn new(rng: R, players: usize) -> Self {
        Self {
            rng,
            players: players.max(1),
        }
    }
}

impl<R: Rng> Input for RandomInput<R> {
    fn request_player_count(&mut self) -> Result<usize, InputError> {
        Ok(self.players)
    }

    fn request_coordinate(
        &mut self,
        max_x: usize,
        max_y: usize,
    ) -> Result<(usize, usize), InputError> {
        Ok((
            self.rng.random_range(0..=max_x),
            self.rng.random_range(0..=max_y),
        ))
    }
}
