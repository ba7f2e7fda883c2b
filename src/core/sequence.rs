//! Double-ended growable tile container.
//!
//! `TileSequence` backs both the hand and the field. It wraps a `Vec<Tile>`
//! but tracks its own logical capacity so the growth policy stays fixed:
//!
//! - starts at [`INITIAL_CAPACITY`]
//! - doubles when an insertion finds it full
//! - halves after a removal leaves it at most half full
//!
//! Halving at exactly 50% while doubling on full means a sequence sitting on
//! the threshold reallocates on every push/remove pair. That is a known
//! inefficiency of the policy, not a correctness problem.
//!
//! ## Fatal conditions
//!
//! Allocation failure while growing and out-of-bounds removal both panic.
//! Neither is recoverable.
//!
//! ```
//! use linear_domino::core::{Tile, TileSequence};
//!
//! let mut field = TileSequence::new();
//! field.push_back(Tile::new(2, 3));
//! field.push_front(Tile::new(1, 2));
//!
//! assert_eq!(field.first(), Some(Tile::new(1, 2)));
//! assert_eq!(field.last(), Some(Tile::new(2, 3)));
//! ```

use serde::{Deserialize, Serialize};

use super::tile::Tile;

/// Capacity of a freshly created sequence.
pub const INITIAL_CAPACITY: usize = 4;

/// Ordered tile container with explicit growth policy.
#[derive(Debug, Serialize, Deserialize)]
#[serde(from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct TileSequence {
    tiles: Vec<Tile>,
    /// Logical capacity, independent of what the allocator actually handed out.
    capacity: usize,
}

impl TileSequence {
    /// Create an empty sequence with the initial capacity.
    #[must_use]
    pub fn new() -> Self {
        let mut sequence = Self {
            tiles: Vec::new(),
            capacity: 0,
        };
        sequence.resize(INITIAL_CAPACITY);
        sequence
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if there are no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Current logical capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Tile at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    /// Leftmost tile.
    #[must_use]
    pub fn first(&self) -> Option<Tile> {
        self.tiles.first().copied()
    }

    /// Rightmost tile.
    #[must_use]
    pub fn last(&self) -> Option<Tile> {
        self.tiles.last().copied()
    }

    /// Iterate over tiles in order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// View the tiles as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }

    /// Append a tile. Amortized O(1).
    pub fn push_back(&mut self, tile: Tile) {
        self.grow_if_full();
        self.tiles.push(tile);
    }

    /// Prepend a tile. O(n), shifts every existing tile.
    pub fn push_front(&mut self, tile: Tile) {
        self.grow_if_full();
        self.tiles.insert(0, tile);
    }

    /// Remove and return the tile at `index`.
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Tile {
        if index >= self.tiles.len() {
            panic!(
                "index {} is out of bounds for tile sequence of length {}",
                index,
                self.tiles.len()
            );
        }

        let removed = self.tiles.remove(index);

        if self.tiles.len() <= self.capacity / 2 {
            self.resize(self.capacity / 2);
        }

        removed
    }

    /// Remove the first tile equal to `tile` by value.
    ///
    /// Returns `false` if no such tile exists.
    pub fn remove_first(&mut self, tile: Tile) -> bool {
        match self.tiles.iter().position(|&t| t == tile) {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    /// Overwrite this sequence with the contents of `source`.
    ///
    /// Existing capacity is reused when large enough.
    pub fn copy_from(&mut self, source: &TileSequence) {
        if self.capacity < source.len() {
            self.resize(source.len());
        }

        self.tiles.clear();
        self.tiles.extend_from_slice(&source.tiles);
    }

    /// Add one to both values of every tile.
    pub fn increment_all(&mut self) {
        for tile in &mut self.tiles {
            tile.left = tile.left.wrapping_add(1);
            tile.right = tile.right.wrapping_add(1);
        }
    }

    fn grow_if_full(&mut self) {
        if self.tiles.len() == self.capacity {
            self.resize((self.capacity * 2).max(1));
        }
    }

    fn resize(&mut self, new_capacity: usize) {
        if new_capacity > self.tiles.capacity() {
            let additional = new_capacity - self.tiles.len();
            if let Err(err) = self.tiles.try_reserve_exact(additional) {
                panic!("memory allocation failed for {} tiles: {}", new_capacity, err);
            }
        } else {
            self.tiles.shrink_to(new_capacity);
        }
        self.capacity = new_capacity;
    }
}

impl Default for TileSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TileSequence {
    fn clone(&self) -> Self {
        let mut copy = Self {
            tiles: Vec::new(),
            capacity: 0,
        };
        copy.resize(self.capacity);
        copy.tiles.extend_from_slice(&self.tiles);
        copy
    }
}

impl PartialEq for TileSequence {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for TileSequence {}

impl From<Vec<Tile>> for TileSequence {
    fn from(tiles: Vec<Tile>) -> Self {
        tiles.into_iter().collect()
    }
}

impl From<TileSequence> for Vec<Tile> {
    fn from(sequence: TileSequence) -> Self {
        sequence.tiles
    }
}

impl FromIterator<Tile> for TileSequence {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut sequence = Self::new();
        for tile in iter {
            sequence.push_back(tile);
        }
        sequence
    }
}

impl<'a> IntoIterator for &'a TileSequence {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

impl std::fmt::Display for TileSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in &self.tiles {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(pairs: &[(i32, i32)]) -> TileSequence {
        pairs.iter().map(|&p| Tile::from(p)).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let s = TileSequence::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), INITIAL_CAPACITY);
        assert_eq!(s.first(), None);
        assert_eq!(s.last(), None);
    }

    #[test]
    fn test_push_back_doubles_capacity() {
        let mut s = TileSequence::new();
        for i in 0..4 {
            s.push_back(Tile::new(i, i));
        }
        assert_eq!(s.capacity(), 4);

        s.push_back(Tile::new(9, 9));
        assert_eq!(s.capacity(), 8);
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn test_push_front_order_and_growth() {
        let mut s = TileSequence::new();
        for i in 1..=5 {
            s.push_front(Tile::new(i, i));
        }

        assert_eq!(s.capacity(), 8);
        let values: Vec<_> = s.iter().map(|t| t.left).collect();
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_remove_at_shifts_and_halves() {
        let mut s = seq(&[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);
        assert_eq!(s.capacity(), 8);

        // 4 <= 8 / 2
        assert_eq!(s.remove_at(1), Tile::new(2, 2));
        assert_eq!(s.capacity(), 4);
        assert_eq!(s.as_slice(), &[
            Tile::new(1, 1),
            Tile::new(3, 3),
            Tile::new(4, 4),
            Tile::new(5, 5),
        ]);

        // 3 > 4 / 2, no shrink
        s.remove_at(0);
        assert_eq!(s.capacity(), 4);

        // 2 <= 4 / 2
        s.remove_at(0);
        assert_eq!(s.capacity(), 2);
    }

    #[test]
    fn test_capacity_thrashes_at_threshold() {
        let mut s = seq(&[(1, 1), (2, 2), (3, 3), (4, 4)]);
        assert_eq!(s.capacity(), 4);

        s.push_back(Tile::new(5, 5));
        assert_eq!(s.capacity(), 8);
        s.remove_at(4);
        assert_eq!(s.capacity(), 4);
        s.push_back(Tile::new(5, 5));
        assert_eq!(s.capacity(), 8);
    }

    #[test]
    fn test_drained_sequence_can_grow_again() {
        let mut s = seq(&[(1, 1)]);
        s.remove_at(0);
        s.remove_first(Tile::new(1, 1));
        assert!(s.is_empty());

        // Shrinks all the way down, then grows from nothing
        let mut t = TileSequence::new();
        t.push_back(Tile::new(1, 1));
        t.push_back(Tile::new(2, 2));
        t.remove_at(0);
        t.remove_at(0);
        assert_eq!(t.capacity(), 1);

        t.push_back(Tile::new(3, 3));
        t.remove_at(0);
        assert_eq!(t.capacity(), 0);

        t.push_back(Tile::new(4, 4));
        assert_eq!(t.capacity(), 1);
        assert_eq!(t.first(), Some(Tile::new(4, 4)));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_remove_at_out_of_bounds_panics() {
        let mut s = seq(&[(1, 2)]);
        s.remove_at(1);
    }

    #[test]
    fn test_remove_first_by_value() {
        let mut s = seq(&[(1, 2), (3, 4), (1, 2)]);

        assert!(s.remove_first(Tile::new(1, 2)));
        assert_eq!(s.as_slice(), &[Tile::new(3, 4), Tile::new(1, 2)]);

        // Value match is exact, orientation matters
        assert!(!s.remove_first(Tile::new(4, 3)));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = seq(&[(1, 2), (2, 3)]);
        let mut copy = original.clone();

        assert_eq!(copy, original);
        assert_eq!(copy.capacity(), original.capacity());

        copy.push_back(Tile::new(3, 4));
        copy.increment_all();

        assert_eq!(original.as_slice(), &[Tile::new(1, 2), Tile::new(2, 3)]);
    }

    #[test]
    fn test_copy_from_reuses_capacity() {
        let source = seq(&[(1, 1), (2, 2)]);
        let mut dest = seq(&[(5, 5), (6, 6), (6, 5), (5, 6), (4, 4)]);
        assert_eq!(dest.capacity(), 8);

        dest.copy_from(&source);
        assert_eq!(dest, source);
        assert_eq!(dest.capacity(), 8);
    }

    #[test]
    fn test_copy_from_grows_when_needed() {
        let source = seq(&[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6)]);
        let mut dest = TileSequence::new();

        dest.copy_from(&source);
        assert_eq!(dest, source);
        assert_eq!(dest.capacity(), 6);
    }

    #[test]
    fn test_increment_all() {
        let mut s = seq(&[(3, 4), (4, 0)]);
        s.increment_all();
        assert_eq!(s.as_slice(), &[Tile::new(4, 5), Tile::new(5, 1)]);
    }

    #[test]
    fn test_increment_all_wraps_at_max() {
        let mut s = seq(&[(i32::MAX, 1)]);
        s.increment_all();
        assert_eq!(s.as_slice(), &[Tile::new(i32::MIN, 2)]);
    }

    #[test]
    fn test_display() {
        let s = seq(&[(1, 2), (2, 3)]);
        assert_eq!(s.to_string(), "[1|2][2|3]");
        assert_eq!(TileSequence::new().to_string(), "");
    }

    #[test]
    fn test_serialization() {
        let s = seq(&[(1, 2), (12, 21)]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"[{"left":1,"right":2},{"left":12,"right":21}]"#);

        let deserialized: TileSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(s, deserialized);
    }
}
