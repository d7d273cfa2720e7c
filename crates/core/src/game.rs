//! Game module - the caller-facing turn controller
//!
//! The engine keeps no state between calls: the caller owns the current board
//! and threads it through [`new_game`] and [`apply_move`]. A move that changes
//! nothing is rejected quietly (no spawn, same board back); an accepted move is
//! followed by exactly one spawn.

use log::debug;
use rand::Rng;

use crate::grid::{Board, Grid};
use crate::moves::shift;
use crate::spawn::spawn;
use crate::types::{Direction, EngineError, INITIAL_TILES};

/// Result of resolving one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnOutcome<const N: usize> {
    /// Board after the turn (equal to the input when `moved` is false)
    pub board: Grid<N>,
    /// Whether the slide changed the board (and a coin was spawned)
    pub moved: bool,
}

/// Start a game: an empty board with two spawned coins
///
/// ```
/// use coin_fusion_core::new_game;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let board = new_game(&mut StdRng::seed_from_u64(7));
/// assert_eq!(board.count_occupied(), 2);
/// ```
pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut board = Board::new();
    for _ in 0..INITIAL_TILES {
        board = spawn(&board, rng);
    }
    board
}

/// Slide `board` toward `direction` and spawn a coin if anything moved
pub fn resolve_turn<const N: usize, R: Rng + ?Sized>(
    board: &Grid<N>,
    direction: Direction,
    rng: &mut R,
) -> TurnOutcome<N> {
    let candidate = shift(board, direction);
    if candidate == *board {
        debug!("move {direction} rejected: board unchanged");
        return TurnOutcome {
            board: *board,
            moved: false,
        };
    }

    TurnOutcome {
        board: spawn(&candidate, rng),
        moved: true,
    }
}

/// Next board after moving `board` toward `direction`
///
/// Returns a board equal to the input when the move is a no-op.
pub fn apply_move<const N: usize, R: Rng + ?Sized>(
    board: &Grid<N>,
    direction: Direction,
    rng: &mut R,
) -> Grid<N> {
    resolve_turn(board, direction, rng).board
}

/// Like [`apply_move`], for directions that arrive as text from an input layer
///
/// Unknown names are an error rather than a silent no-op, so a typo can't be
/// mistaken for a move that simply didn't change anything.
pub fn apply_move_named<const N: usize, R: Rng + ?Sized>(
    board: &Grid<N>,
    direction: &str,
    rng: &mut R,
) -> Result<Grid<N>, EngineError> {
    let direction: Direction = direction.parse()?;
    Ok(apply_move(board, direction, rng))
}
