//! Linear domino rules.

use log::trace;

use crate::core::{End, Tile, TileKind, TileSequence};
use crate::rules::RulesEngine;

/// Rules for linear domino with wildcard, increment and mirror tiles.
///
/// Stateless: all state lives in the field and hand passed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinearDomino;

impl LinearDomino {
    /// Create the rules engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// An exposed end accepts a tile sharing either value, and a `0` end accepts anything.
fn accepts(end_value: i32, tile: Tile) -> bool {
    end_value == tile.left || end_value == tile.right || end_value == 0
}

impl RulesEngine for LinearDomino {
    fn is_legal(&self, field: &TileSequence, end: End, tile: Tile) -> bool {
        // Rejects left == 11 and right == 12 only; the other special
        // components are not checked. Specials that fail here are caught below.
        if field.is_empty() && tile.left != Tile::INCREMENT.left && tile.right != Tile::MIRROR.left {
            return true;
        }

        if tile.is_special() {
            return true;
        }

        match end {
            End::Start => false,
            End::Left => field.first().is_some_and(|first| accepts(first.left, tile)),
            End::Right => field.last().is_some_and(|last| accepts(last.right, tile)),
        }
    }

    fn apply(&self, field: &mut TileSequence, hand: &mut TileSequence, end: End, tile: Tile) -> bool {
        if !self.is_legal(field, end, tile) {
            return false;
        }

        if !hand.remove_first(tile) {
            return false;
        }

        match end {
            End::Start => field.push_back(tile),
            End::Right => {
                let placed = match tile.kind() {
                    TileKind::Increment => {
                        field.increment_all();
                        field.last().unwrap_or(tile)
                    }
                    TileKind::Mirror => field.last().map_or(tile, Tile::reversed),
                    _ => tile,
                };
                field.push_back(placed);
            }
            End::Left => {
                let placed = match tile.kind() {
                    TileKind::Increment => {
                        field.increment_all();
                        field.first().unwrap_or(tile)
                    }
                    TileKind::Mirror => field.first().map_or(tile, Tile::reversed),
                    _ => tile,
                };
                field.push_front(placed);
            }
        }

        match tile.kind().name() {
            Some(name) => trace!("played {} tile at {:?}, field now {}", name, end, field),
            None => trace!("played {} at {:?}, field now {}", tile, end, field),
        }
        true
    }

    fn has_any_legal_move(&self, field: &TileSequence, hand: &TileSequence) -> bool {
        let (Some(first), Some(last)) = (field.first(), field.last()) else {
            return true;
        };

        let left_end = first.left;
        let right_end = last.right;

        hand.iter().any(|&tile| {
            tile.left == left_end
                || tile.right == left_end
                || tile.left == right_end
                || tile.right == right_end
                || left_end == 0
                || right_end == 0
                || tile.is_special()
        })
    }
}
