//! Game board: grid, ships and guess history.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Cell, GuessResult};
use crate::grid::Grid;
use crate::ship::Ship;

pub struct Board {
    width: usize,
    height: usize,
    grid: Grid,
    ships: Vec<Ship>,
    guesses: BTreeSet<(usize, usize)>,
}

impl Board {
    /// Create an empty board (no ships, no guesses, all cells blank).
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions);
        }
        Ok(Board {
            width,
            height,
            grid: Grid::new(width, height)?,
            ships: Vec::new(),
            guesses: BTreeSet::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Every coordinate guessed so far.
    pub fn guesses(&self) -> &BTreeSet<(usize, usize)> {
        &self.guesses
    }

    /// Returns `true` when every ship is sunk (vacuously so with no ships).
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    /// Place a ship at `(x, y)`.
    ///
    /// The bound check is inclusive: `x == width` or `y == height` is
    /// accepted. Such a ship lies off the rendered grid and cannot be hit by
    /// a guess drawn from `[0, width) × [0, height)`.
    pub fn add_ship(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        if x > self.width || y > self.height {
            return Err(BoardError::OutOfBounds { x, y });
        }
        if self.ships.iter().any(|s| s.coordinates() == (x, y)) {
            return Err(BoardError::DuplicatePlacement { x, y });
        }
        self.ships.push(Ship::new(x, y));
        Ok(())
    }

    /// Apply a guess at `(x, y)`.
    ///
    /// The hit ship's cell becomes a ship marker and every other ship's cell
    /// is re-stamped with the miss marker. The guessed cell itself is only
    /// touched when it holds a ship. Repeated guesses are accepted.
    pub fn process_guess(&mut self, x: usize, y: usize) -> GuessResult {
        self.guesses.insert((x, y));
        let mut result = GuessResult::Miss;
        for ship in self.ships.iter_mut() {
            let (sx, sy) = ship.coordinates();
            if ship.guess(x, y) {
                self.grid.set(sx, sy, Cell::Ship);
                result = GuessResult::Hit;
            } else {
                self.grid.set(sx, sy, Cell::Miss);
            }
        }
        log::debug!("guess ({}, {}) -> {:?}", x, y, result);
        result
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("ships", &self.ships)
            .field("guesses", &self.guesses)
            .field("grid", &self.grid)
            .finish()
    }
}
