//! Board and player construction: random ship coordinates and player naming.

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::GameConfig;
use crate::game::Player;

/// Draw `n` distinct coordinates with `0 <= x <= max_x` and `0 <= y <= max_y`.
///
/// Duplicates are rejected and redrawn. Fails with
/// [`BoardError::CapacityExceeded`] when the space holds fewer than `n`
/// coordinates.
pub fn generate_unique_coordinates<R: Rng>(
    rng: &mut R,
    n: usize,
    max_x: usize,
    max_y: usize,
) -> Result<BTreeSet<(usize, usize)>, BoardError> {
    // a space too large to count holds any n
    let available = max_x
        .checked_add(1)
        .zip(max_y.checked_add(1))
        .and_then(|(w, h)| w.checked_mul(h))
        .unwrap_or(usize::MAX);
    if n > available {
        return Err(BoardError::CapacityExceeded {
            requested: n,
            available,
        });
    }
    let mut coords = BTreeSet::new();
    while coords.len() < n {
        let x = rng.random_range(0..=max_x);
        let y = rng.random_range(0..=max_y);
        coords.insert((x, y));
    }
    Ok(coords)
}

/// Build a board for `config` with `ship_count` ships at random coordinates.
pub fn new_board<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Board, BoardError> {
    config.validate()?;
    let mut board = Board::new(config.width, config.height)?;
    let coords =
        generate_unique_coordinates(rng, config.ship_count, config.width - 1, config.height - 1)?;
    for (x, y) in coords {
        board.add_ship(x, y)?;
    }
    log::debug!("placed {} ships on {}x{} board", board.ships().len(), config.width, config.height);
    Ok(board)
}

/// Players named "Player 1" through "Player n". At least one player is always created.
pub fn make_players(n: usize) -> Vec<Player> {
    (1..=n.max(1))
        .map(|i| Player::new(format!("Player {}", i)))
        .collect()
}
