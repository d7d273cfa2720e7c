use serde::{Deserialize, Serialize};

use crate::grid::Board;
use crate::types::{Tile, GRID_SIZE};

/// Read-only view of a session for presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: [[Tile; GRID_SIZE]; GRID_SIZE],
    pub seed: u32,
    /// Accepted moves since the game started
    pub moves: u32,
    pub occupied: u32,
    pub max_tile: Tile,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0; GRID_SIZE]; GRID_SIZE];
        self.seed = 0;
        self.moves = 0;
        self.occupied = 0;
        self.max_tile = 0;
    }

    /// Copy the board-derived fields from `board`
    pub fn fill_board(&mut self, board: &Board) {
        self.board = *board.rows();
        self.occupied = board.count_occupied() as u32;
        self.max_tile = board.max_tile();
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0; GRID_SIZE]; GRID_SIZE],
            seed: 0,
            moves: 0,
            occupied: 0,
            max_tile: 0,
        };
        s.clear();
        s
    }
}
