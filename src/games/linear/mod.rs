//! Linear domino.
//!
//! Tiles are laid at either end of a single line:
//! - A tile fits an end when it shares a value with it, or the end is `0`
//! - Wildcard `(0,0)` fits anywhere
//! - Increment `(11,11)` raises every laid tile by one and copies its neighbour
//! - Mirror `(12,21)` becomes its neighbour reversed
//! - Play stops when nothing in the hand fits; the score is the sum of the line

mod deal;
mod game;

pub use deal::{deal_hand, ALPHABET};
pub use game::LinearDomino;
