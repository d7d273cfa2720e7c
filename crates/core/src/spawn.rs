//! Spawner - drop a new coin on a random empty cell
//!
//! This is the only source of randomness in the engine. The cell is chosen
//! uniformly among the empty cells; the coin is `STARTING_TILES[0]` with
//! probability `FIRST_STARTING_TILE_PROBABILITY`, otherwise `STARTING_TILES[1]`.

use log::trace;
use rand::Rng;

use crate::grid::Grid;
use crate::types::{Tile, FIRST_STARTING_TILE_PROBABILITY, STARTING_TILES};

/// Draw the value of a freshly spawned coin
pub fn starting_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_bool(FIRST_STARTING_TILE_PROBABILITY) {
        STARTING_TILES[0]
    } else {
        STARTING_TILES[1]
    }
}

/// Return a copy of `grid` with one new coin on a random empty cell
///
/// A full grid comes back unchanged; that is a normal outcome, not an error.
///
/// Deterministic example using a seeded RNG:
/// ```
/// use coin_fusion_core::{spawn, Board};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(123);
/// let board = spawn(&Board::new(), &mut rng);
/// assert_eq!(board.count_occupied(), 1);
/// ```
pub fn spawn<const N: usize, R: Rng + ?Sized>(grid: &Grid<N>, rng: &mut R) -> Grid<N> {
    let open = grid.empty_cells().count();
    if open == 0 {
        trace!("grid full, nothing spawned");
        return *grid;
    }

    let pick = rng.gen_range(0..open);
    let Some((row, col)) = grid.empty_cells().nth(pick) else {
        return *grid;
    };
    let tile = starting_tile(rng);
    trace!("spawned {tile} at ({row}, {col})");

    let mut next = *grid;
    next.set(row, col, tile);
    next
}
