//! Grid module - the square board of coin values
//!
//! The grid is an N x N array of tile values where `0` is an empty cell.
//! It is a `Copy` value type: every transform returns a new grid and leaves its
//! input untouched, so callers can hold on to the previous board freely.
//! Coordinates: `(row, col)` where row 0 is the top and col 0 is the left edge.

use std::fmt;

use crate::types::{Tile, EMPTY, GRID_SIZE};

/// A square grid of tiles, stored row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid<const N: usize> {
    cells: [[Tile; N]; N],
}

/// The standard 4x4 game board
pub type Board = Grid<GRID_SIZE>;

impl<const N: usize> Grid<N> {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [[EMPTY; N]; N],
        }
    }

    /// Create a grid from row-major rows
    pub fn from_rows(cells: [[Tile; N]; N]) -> Self {
        Self { cells }
    }

    /// Width and height of the grid
    pub fn size(&self) -> usize {
        N
    }

    /// Borrow the rows
    pub fn rows(&self) -> &[[Tile; N]; N] {
        &self.cells
    }

    /// Consume the grid, returning its rows
    pub fn into_rows(self) -> [[Tile; N]; N] {
        self.cells
    }

    /// Get the tile at `(row, col)`
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set the tile at `(row, col)` on this copy
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Return a copy with `(row, col)` replaced, or None if out of bounds
    pub fn with_tile(&self, row: usize, col: usize, tile: Tile) -> Option<Self> {
        let mut next = *self;
        next.set(row, col, tile).then_some(next)
    }

    /// Independent copy of this grid
    ///
    /// The grid owns its cells inline, so this is the same as `Copy`; it exists
    /// for call sites that want the copy to be explicit.
    pub fn deep_copy(&self) -> Self {
        *self
    }

    /// All tiles in row-major order, empty cells included
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Coordinates of every empty cell, in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .filter(|(_, &tile)| tile == EMPTY)
                .map(move |(col, _)| (row, col))
        })
    }

    /// Number of non-empty cells
    pub fn count_occupied(&self) -> usize {
        self.tiles().filter(|&tile| tile != EMPTY).count()
    }

    /// Check if no cell is empty
    pub fn is_full(&self) -> bool {
        self.tiles().all(|tile| tile != EMPTY)
    }

    /// Check if every cell is empty
    pub fn is_empty(&self) -> bool {
        self.tiles().all(|tile| tile == EMPTY)
    }

    /// Largest tile on the grid (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.tiles().max().unwrap_or(EMPTY)
    }

    /// Swap rows and columns: cell `(i, j)` of the result is `(j, i)` of `self`
    pub fn transpose(&self) -> Self {
        let mut out = Self::new();
        for (i, row) in self.cells.iter().enumerate() {
            for (j, &tile) in row.iter().enumerate() {
                out.cells[j][i] = tile;
            }
        }
        out
    }

    /// Reverse the order of tiles within each row
    pub fn reverse_rows(&self) -> Self {
        let mut out = *self;
        for row in &mut out.cells {
            row.reverse();
        }
        out
    }

    /// Apply `f` to every row independently
    pub fn map_rows(&self, mut f: impl FnMut([Tile; N]) -> [Tile; N]) -> Self {
        let mut out = *self;
        for row in &mut out.cells {
            *row = f(*row);
        }
        out
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<[[Tile; N]; N]> for Grid<N> {
    fn from(cells: [[Tile; N]; N]) -> Self {
        Self::from_rows(cells)
    }
}

/// One row per line, values right-aligned, `.` for empty cells
impl<const N: usize> fmt::Display for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &tile) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                if tile == EMPTY {
                    write!(f, "{:>4}", ".")?;
                } else {
                    write!(f, "{:>4}", tile)?;
                }
            }
        }
        Ok(())
    }
}
