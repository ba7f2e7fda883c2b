//! Core engine types: tiles, sequences, moves, state, RNG, configuration.
//!
//! Everything here is rule-agnostic data. The rules live in `rules` and
//! `games`, which operate on these types.

pub mod tile;
pub mod sequence;
pub mod moves;
pub mod state;
pub mod rng;
pub mod config;

pub use tile::{Tile, TileKind};
pub use sequence::{TileSequence, INITIAL_CAPACITY};
pub use moves::{End, Move, MoveLog};
pub use state::GameState;
pub use rng::GameRng;
pub use config::{ConfigError, GameConfig, Mode, DEFAULT_HAND_SIZE};
