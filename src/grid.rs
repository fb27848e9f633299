//! A fixed-size `width × height` grid of display cells.
//!
//! Cells are addressed by `(x, y)` with `x` in `[0, width)` selecting the row
//! and `y` in `[0, height)` selecting the column. Storage is a flat vector in
//! row-major order; the size is fixed at construction.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Cell};
use crate::config::Markers;

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell blank. Fails when `width * height`
    /// does not fit in `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let len = width
            .checked_mul(height)
            .ok_or(BoardError::InvalidDimensions)?;
        Ok(Grid {
            width,
            height,
            cells: vec![Cell::Blank; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(x * self.height + y)
        } else {
            None
        }
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `(x, y)`. Writes outside the grid are ignored
    /// and return `false`.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Iterate rows, each as a slice of `height` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on zero; an empty grid simply has no rows
        self.cells.chunks(self.height.max(1))
    }

    /// Number of cells currently holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Borrow the grid as a displayable value using `markers`.
    pub fn display<'a>(&'a self, markers: &'a Markers) -> GridDisplay<'a> {
        GridDisplay {
            grid: self,
            markers,
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{} {{", self.width, self.height)?;
        write!(f, "{}", self.display(&Markers::default()))?;
        write!(f, "}}")
    }
}

/// Text rendering of a [`Grid`]: one line per row, markers separated by spaces.
pub struct GridDisplay<'a> {
    grid: &'a Grid,
    markers: &'a Markers,
}

impl fmt::Display for GridDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                let ch = match cell {
                    Cell::Blank => self.markers.blank,
                    Cell::Miss => self.markers.miss,
                    Cell::Ship => self.markers.ship,
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

