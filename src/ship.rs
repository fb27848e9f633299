//! Single-cell ships.

use core::fmt;

/// A ship occupying one coordinate. Once sunk it stays sunk.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    x: usize,
    y: usize,
    sunk: bool,
}

impl Ship {
    pub(crate) fn new(x: usize, y: usize) -> Self {
        Ship { x, y, sunk: false }
    }

    /// Position of the ship as `(x, y)`.
    pub fn coordinates(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Sink the ship if it sits at `(x, y)`. Returns `true` on a hit.
    pub(crate) fn guess(&mut self, x: usize, y: usize) -> bool {
        if (self.x, self.y) == (x, y) {
            self.sunk = true;
            true
        } else {
            false
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ at: ({}, {}), sunk: {} }}",
            self.x, self.y, self.sunk
        )
    }
}

