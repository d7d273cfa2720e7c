//! Coin Fusion (workspace facade crate).
//!
//! Re-exports the engine crates under `coin_fusion::{core,types}` so front-ends
//! and tests depend on one package while the implementation lives in `crates/`.

pub use coin_fusion_core as core;
pub use coin_fusion_types as types;
