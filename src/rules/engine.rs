//! Rules engine trait for domino variants.
//!
//! A rules engine is a stateless decision procedure over a field and a
//! hand:
//! - Is a proposed move legal
//! - How a move changes the field and hand
//! - Whether any move is left at all
//!
//! The solver and the interactive loop only talk to the game through this
//! trait.

use crate::core::{End, GameState, Move, Tile, TileSequence};

use super::scoring;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `is_legal`: must not look at the hand, only at the field ends
/// - `apply`: must be a no-op for illegal moves and absent tiles
/// - `has_any_legal_move`: leaf test used by the solver
pub trait RulesEngine {
    /// Check if `tile` may be placed at `end` of `field`.
    fn is_legal(&self, field: &TileSequence, end: End, tile: Tile) -> bool;

    /// Play `tile` from `hand` at `end` of `field`.
    ///
    /// Returns `true` if the move was performed.
    fn apply(&self, field: &mut TileSequence, hand: &mut TileSequence, end: End, tile: Tile) -> bool;

    /// Check if any tile in `hand` can still be played.
    fn has_any_legal_move(&self, field: &TileSequence, hand: &TileSequence) -> bool;

    /// Value of a line.
    fn score(&self, field: &TileSequence) -> i64 {
        scoring::score(field)
    }

    // === Convenience Methods ===

    /// Enumerate every `(end, tile)` pair from the hand that `is_legal` accepts.
    ///
    /// Duplicate hand tiles yield duplicate moves.
    fn legal_moves(&self, field: &TileSequence, hand: &TileSequence) -> Vec<Move> {
        let mut moves = Vec::new();

        for &tile in hand {
            for end in End::ALL {
                if self.is_legal(field, end, tile) {
                    moves.push(Move::new(end, tile));
                }
            }
        }

        moves
    }

    /// Apply a move to a game state, recording it if it was performed.
    fn play(&self, state: &mut GameState, end: End, tile: Tile) -> bool {
        let applied = self.apply(&mut state.field, &mut state.hand, end, tile);
        if applied {
            state.moves.push(Move::new(end, tile));
        }
        applied
    }

    /// Check if the game has ended.
    fn is_over(&self, state: &GameState) -> bool {
        !self.has_any_legal_move(&state.field, &state.hand)
    }
}
