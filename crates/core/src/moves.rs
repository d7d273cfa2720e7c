//! Move resolver - slide the whole grid in one direction
//!
//! Every direction is reduced to "merge each row toward index 0" by flipping
//! and transposing the grid, merging, and undoing the flip:
//!
//! | Direction | Before merge | After merge |
//! |-----------|--------------|-------------|
//! | Left | - | - |
//! | Right | reverse rows | reverse rows |
//! | Up | transpose | transpose |
//! | Down | transpose, reverse rows | reverse rows, transpose |
//!
//! No randomness here; spawning happens in [`crate::game`].

use crate::grid::Grid;
use crate::rules::merge_line;
use crate::types::Direction;

/// Slide and merge every line of `grid` toward `direction`
///
/// The input is left untouched; a grid with no possible slide comes back equal
/// to the input.
pub fn shift<const N: usize>(grid: &Grid<N>, direction: Direction) -> Grid<N> {
    match direction {
        Direction::Left => merge_rows(grid),
        Direction::Right => merge_rows(&grid.reverse_rows()).reverse_rows(),
        Direction::Up => merge_rows(&grid.transpose()).transpose(),
        Direction::Down => merge_rows(&grid.transpose().reverse_rows())
            .reverse_rows()
            .transpose(),
    }
}

/// Check if sliding toward `direction` would change anything
pub fn can_shift<const N: usize>(grid: &Grid<N>, direction: Direction) -> bool {
    shift(grid, direction) != *grid
}

fn merge_rows<const N: usize>(grid: &Grid<N>) -> Grid<N> {
    grid.map_rows(merge_line)
}
