//! Move records and the append-only move log.
//!
//! A move is an end of the line plus the tile proposed for it. The log keeps
//! the tile as proposed, before any special-tile transformation, so a
//! mirror play is logged as `(12,21)` and not as the value it took on.

use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileKind};

/// Where a tile is placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum End {
    /// Opening move on an empty field.
    Start,
    /// Prepend to the line.
    Left,
    /// Append to the line.
    Right,
}

impl End {
    /// All ends in code order.
    pub const ALL: [End; 3] = [End::Start, End::Left, End::Right];

    /// One-letter code: `S`, `L` or `R`.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            End::Start => 'S',
            End::Left => 'L',
            End::Right => 'R',
        }
    }

    /// Parse a one-letter code.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'S' => Some(End::Start),
            'L' => Some(End::Left),
            'R' => Some(End::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for End {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// End the tile went to.
    pub end: End,
    /// Tile as proposed by the player.
    pub tile: Tile,
}

impl Move {
    /// Create a move record.
    #[must_use]
    pub const fn new(end: End, tile: Tile) -> Self {
        Self { end, tile }
    }

    /// Special kind of the played tile.
    #[must_use]
    pub const fn kind(&self) -> TileKind {
        self.tile.kind()
    }

    /// Compact three-byte form: end code, then each value offset by `'0'`.
    ///
    /// Special values land on `;` (11), `<` (12) and `E` (21). Values whose
    /// offset does not fit a byte are truncated to the low byte.
    #[must_use]
    pub fn codes(&self) -> [u8; 3] {
        [
            self.end.code() as u8,
            self.tile.left.wrapping_add(i32::from(b'0')) as u8,
            self.tile.right.wrapping_add(i32::from(b'0')) as u8,
        ]
    }
}

/// Ordered, append-only record of applied moves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Most recent move.
    #[must_use]
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Iterate in play order.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// View as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl FromIterator<Move> for MoveLog {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}
