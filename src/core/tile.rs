//! Tile representation.
//!
//! A tile is an immutable pair of integers `(left, right)`. Three reserved
//! value pairs denote special tiles:
//!
//! - **Wildcard** `(0,0)`: matches any exposed end.
//! - **Increment** `(11,11)`: raises every field tile by one, then copies the
//!   adjacent tile.
//! - **Mirror** `(12,21)`: becomes the reverse of the adjacent tile.
//!
//! All other tiles carry values in `1..=6`.
//!
//! ```
//! use linear_domino::core::{Tile, TileKind};
//!
//! assert_eq!(Tile::new(0, 0).kind(), TileKind::Wildcard);
//! assert_eq!(Tile::new(3, 4).kind(), TileKind::Regular);
//! assert_eq!(Tile::new(3, 4).pips(), 7);
//! ```

use serde::{Deserialize, Serialize};

/// Kind of a tile, derived from its value pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Any tile that is not one of the reserved pairs.
    Regular,
    /// `(0,0)`.
    Wildcard,
    /// `(11,11)`.
    Increment,
    /// `(12,21)`.
    Mirror,
}

impl TileKind {
    /// Name used by the dealer alphabet, `None` for regular tiles.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self {
            TileKind::Regular => None,
            TileKind::Wildcard => Some("any"),
            TileKind::Increment => Some("sum"),
            TileKind::Mirror => Some("mirror"),
        }
    }
}

/// A single domino tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Left value.
    pub left: i32,
    /// Right value.
    pub right: i32,
}

impl Tile {
    /// Matches any exposed end.
    pub const WILDCARD: Tile = Tile::new(0, 0);

    /// Increments the whole field when played.
    pub const INCREMENT: Tile = Tile::new(11, 11);

    /// Takes the reversed value of its neighbour when played.
    pub const MIRROR: Tile = Tile::new(12, 21);

    /// Create a tile.
    #[must_use]
    pub const fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }

    /// Classify this tile by its value pair.
    #[must_use]
    pub const fn kind(self) -> TileKind {
        match (self.left, self.right) {
            (0, 0) => TileKind::Wildcard,
            (11, 11) => TileKind::Increment,
            (12, 21) => TileKind::Mirror,
            _ => TileKind::Regular,
        }
    }

    /// Check if this is one of the three special tiles.
    #[must_use]
    pub const fn is_special(self) -> bool {
        !matches!(self.kind(), TileKind::Regular)
    }

    /// Sum of both values.
    #[must_use]
    pub const fn pips(self) -> i64 {
        self.left as i64 + self.right as i64
    }

    /// The same tile turned around.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.right, self.left)
    }
}

impl From<(i32, i32)> for Tile {
    fn from((left, right): (i32, i32)) -> Self {
        Self::new(left, right)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}
