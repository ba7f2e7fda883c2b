//! State of a single game: the line, the hand and what was played.
//!
//! `GameState` holds data only. Rules are applied through
//! [`RulesEngine::play`](crate::rules::RulesEngine::play).

use serde::{Deserialize, Serialize};

use super::moves::MoveLog;
use super::sequence::TileSequence;

/// One game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The line of played tiles.
    pub field: TileSequence,
    /// Tiles still available.
    pub hand: TileSequence,
    /// Moves that were actually applied, in order.
    pub moves: MoveLog,
}

impl GameState {
    /// Start a game with an empty field.
    #[must_use]
    pub fn new(hand: TileSequence) -> Self {
        Self {
            field: TileSequence::new(),
            hand,
            moves: MoveLog::new(),
        }
    }
}
