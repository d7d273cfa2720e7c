//! Session module - a convenience owner of one running game
//!
//! The engine functions are stateless; `GameSession` is simply a caller that
//! keeps the current board, a seeded [`SimpleRng`] and a move counter together,
//! which is what a front-end usually wants.

use crate::game::{new_game, resolve_turn};
use crate::grid::Board;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, EngineError};

/// One game in progress
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    rng: SimpleRng,
    seed: u32,
    /// Monotonic count of accepted moves (rejected moves don't count)
    moves: u32,
}

impl GameSession {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = new_game(&mut rng);
        Self {
            board,
            rng,
            seed,
            moves: 0,
        }
    }

    /// Start over with the same seed
    pub fn restart(&mut self) {
        *self = Self::new(self.seed);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Apply a move; returns true if it was accepted
    pub fn apply(&mut self, direction: Direction) -> bool {
        let outcome = resolve_turn(&self.board, direction, &mut self.rng);
        if outcome.moved {
            self.board = outcome.board;
            self.moves += 1;
        }
        outcome.moved
    }

    /// Apply a move given by name (see [`Direction`]'s `FromStr`)
    pub fn apply_named(&mut self, direction: &str) -> Result<bool, EngineError> {
        let direction: Direction = direction.parse()?;
        Ok(self.apply(direction))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.fill_board(&self.board);
        out.seed = self.seed;
        out.moves = self.moves;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
