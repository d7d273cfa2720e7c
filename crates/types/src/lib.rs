//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with no dependency on rendering or input, making them
//! usable in any context (core logic, a terminal front-end, a web front-end).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed square grid:
//!
//! - **Size**: 4 x 4 cells (`GRID_SIZE`)
//! - **Coordinates**: `(row, col)`, both indexed 0-3, row 0 at the top
//! - **Empty cell**: tile value `0`
//!
//! # Coins
//!
//! Tile values are coin denominations in cents:
//!
//! | Value | Coin | Produced by |
//! |-------|------|-------------|
//! | 5 | nickel | spawn (90%) |
//! | 10 | dime | spawn (10%), 5 + 5 |
//! | 25 | quarter | - |
//! | 50 | half dollar | 25 + 25, five 10s in a row |
//! | 100 | dollar | 50 + 50 |
//!
//! # Examples
//!
//! ```
//! use coin_fusion_types::{Direction, EngineError, GRID_SIZE, STARTING_TILES};
//!
//! // Parse a direction (case-insensitive)
//! let dir: Direction = "Left".parse().unwrap();
//! assert_eq!(dir, Direction::Left);
//!
//! // Unknown names are rejected, not ignored
//! let err = "sideways".parse::<Direction>().unwrap_err();
//! assert_eq!(err, EngineError::InvalidDirection("sideways".to_string()));
//!
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(STARTING_TILES, [5, 10]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single cell value in cents. `0` means empty.
pub type Tile = u32;

/// Empty cell marker
pub const EMPTY: Tile = 0;

/// Board width and height in cells
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Every tile value that may appear on a board (besides `EMPTY`)
pub const DENOMINATIONS: [Tile; 5] = [5, 10, 25, 50, 100];

/// Candidate values for freshly spawned tiles, most likely first
pub const STARTING_TILES: [Tile; 2] = [5, 10];

/// Probability that a spawn uses `STARTING_TILES[0]`
pub const FIRST_STARTING_TILE_PROBABILITY: f64 = 0.9;

/// Number of tiles placed by a new game
pub const INITIAL_TILES: usize = 2;

/// Returns true if `tile` is empty or one of the known denominations
pub fn is_valid_tile(tile: Tile) -> bool {
    tile == EMPTY || DENOMINATIONS.contains(&tile)
}

/// Errors raised at the engine boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A direction name or code that does not map to a `Direction`
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),
}

/// The four directions a move can slide the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in wire-code order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Convert to lowercase string
    ///
    /// # Examples
    ///
    /// ```
    /// use coin_fusion_types::Direction;
    ///
    /// assert_eq!(Direction::Up.as_str(), "up");
    /// assert_eq!(Direction::Down.as_str(), "down");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// The direction that slides tiles back the other way
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    /// Accepts full names or single letters (case-insensitive):
    /// "left" | "l", "right" | "r", "up" | "u", "down" | "d"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            _ => Err(EngineError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = EngineError;

    /// 0=Left, 1=Right, 2=Up, 3=Down
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| EngineError::InvalidDirection(code.to_string()))
    }
}
