//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole Coin Fusion board engine: the grid, the merge
//! rules, the move resolver and the spawner. It has **no dependencies** on
//! rendering, input or I/O, making it:
//!
//! - **Stateless**: the caller owns the board and passes it into every call
//! - **Deterministic**: randomness comes from an injected `rand::Rng`
//! - **Value-based**: boards are `Copy`; no call mutates the board it was given
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 board of coin values with transpose/reverse transforms
//! - [`rules`]: coin merge table and the single-pass line merge
//! - [`moves`]: reduces all four directions to a left merge
//! - [`spawn`](mod@spawn): places a 5 (90%) or 10 (10%) on a random empty cell
//! - [`game`]: `new_game` / `apply_move`, the two calls a front-end needs
//! - [`rng`]: seeded LCG for reproducible sessions
//! - [`session`]: convenience owner of a running game
//! - [`snapshot`]: serializable observation for presentation layers
//!
//! # Game Rules
//!
//! - **Slide**: all coins slide as far as possible toward the chosen edge
//! - **Fuse**: 5+5 -> 10, 25+25 -> 50, 50+50 -> 100, five 10s in a row -> 50
//! - **Single pass**: a coin produced by a fusion does not fuse again that move
//! - **Spawn**: a move that changed the board is followed by one new coin;
//!   a move that changed nothing is ignored
//!
//! # Example
//!
//! ```
//! use coin_fusion_core::{apply_move, new_game, SimpleRng};
//! use coin_fusion_core::types::Direction;
//!
//! let mut rng = SimpleRng::new(12345);
//! let board = new_game(&mut rng);
//! assert_eq!(board.count_occupied(), 2);
//!
//! let next = apply_move(&board, Direction::Left, &mut rng);
//! assert!(next.count_occupied() <= 3);
//! ```

pub mod game;
pub mod grid;
pub mod moves;
pub mod rng;
pub mod rules;
pub mod session;
pub mod snapshot;
pub mod spawn;

pub use coin_fusion_types as types;

// Re-export commonly used types for convenience
pub use game::{apply_move, apply_move_named, new_game, resolve_turn, TurnOutcome};
pub use grid::{Board, Grid};
pub use moves::{can_shift, shift};
pub use rng::SimpleRng;
pub use rules::{merge_line, pair_merge};
pub use session::GameSession;
pub use snapshot::GameSnapshot;
pub use spawn::spawn;
