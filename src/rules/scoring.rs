//! Line scoring.

use crate::core::TileSequence;

/// Sum of `left + right` over every tile. Zero for an empty sequence.
#[must_use]
pub fn score(sequence: &TileSequence) -> i64 {
    sequence.iter().map(|tile| tile.pips()).sum()
}
