//! # linear-domino
//!
//! Rule engine and exhaustive solver for linear domino.
//!
//! Tiles are placed at either end of a growing line. Some tiles carry
//! special effects, and the goal is the highest line total once nothing in
//! the hand fits any more.
//!
//! ## Design Principles
//!
//! 1. **Stateless Rules**: `RulesEngine` decides legality and applies moves
//!    to a field and hand it is handed. It keeps nothing between calls.
//!
//! 2. **Explicit Randomness**: Hands are dealt from a seeded `GameRng`
//!    passed in by the caller. Same seed, same hand.
//!
//! 3. **Presentation at the Edge**: Moves are stored as tagged records and
//!    only turned into display codes by `render`.
//!
//! ## Modules
//!
//! - `core`: Tiles, tile sequences, moves, game state, RNG, configuration
//! - `rules`: RulesEngine trait and scoring
//! - `games`: Linear domino rules and the random dealer
//! - `solver`: Exhaustive depth-first search
//! - `render`: Text output of lines and move logs
//! - `input`: Text input of hands and moves

pub mod core;
pub mod rules;
pub mod games;
pub mod solver;
pub mod render;
pub mod input;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    End, Move, MoveLog,
    Tile, TileKind, TileSequence,
    GameState, GameRng,
    GameConfig, Mode, ConfigError,
};

pub use crate::rules::{RulesEngine, score};

pub use crate::games::linear::{LinearDomino, deal_hand};

pub use crate::solver::{Solver, Solution, SolveStats, Progress, NoProgress};

pub use crate::input::{InputError, TokenReader, parse_hand};

pub use crate::error::{DominoError, Result};
