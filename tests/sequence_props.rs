//! Property tests for TileSequence and scoring.

use proptest::prelude::*;

use linear_domino::core::{Tile, TileSequence};
use linear_domino::rules::score;

fn tile() -> impl Strategy<Value = Tile> {
    (0..=6i32, 0..=6i32).prop_map(|(left, right)| Tile::new(left, right))
}

fn tiles(max: usize) -> impl Strategy<Value = Vec<Tile>> {
    prop::collection::vec(tile(), 0..max)
}

proptest! {
    #[test]
    fn prop_push_back_keeps_order(values in tiles(40)) {
        let sequence: TileSequence = values.clone().into();
        prop_assert_eq!(sequence.as_slice(), values.as_slice());
        prop_assert!(sequence.capacity() >= sequence.len());
    }

    #[test]
    fn prop_push_front_reverses(values in tiles(40)) {
        let mut sequence = TileSequence::new();
        for &t in &values {
            sequence.push_front(t);
        }

        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(sequence.as_slice(), expected.as_slice());
    }

    #[test]
    fn prop_remove_at_preserves_others(values in tiles(40), pick in any::<prop::sample::Index>()) {
        prop_assume!(!values.is_empty());
        let index = pick.index(values.len());

        let mut sequence: TileSequence = values.clone().into();
        let removed = sequence.remove_at(index);

        let mut expected = values.clone();
        let expected_removed = expected.remove(index);

        prop_assert_eq!(removed, expected_removed);
        prop_assert_eq!(sequence.as_slice(), expected.as_slice());
        prop_assert!(sequence.capacity() >= sequence.len());
    }

    #[test]
    fn prop_clone_is_independent(values in tiles(20), extra in tile()) {
        let original: TileSequence = values.clone().into();
        let mut copy = original.clone();

        copy.push_back(extra);
        copy.push_front(extra);
        copy.increment_all();
        if !copy.is_empty() {
            copy.remove_at(0);
        }

        prop_assert_eq!(original.as_slice(), values.as_slice());
    }

    #[test]
    fn prop_copy_from_matches_source(source in tiles(30), dest in tiles(30)) {
        let source: TileSequence = source.into();
        let mut dest: TileSequence = dest.into();

        dest.copy_from(&source);
        prop_assert_eq!(&dest, &source);
        prop_assert!(dest.capacity() >= source.len());
    }

    #[test]
    fn prop_score_is_pip_sum(values in tiles(40)) {
        let sequence: TileSequence = values.clone().into();
        let expected: i64 = values.iter().map(|t| i64::from(t.left) + i64::from(t.right)).sum();
        prop_assert_eq!(score(&sequence), expected);
    }

    #[test]
    fn prop_increment_adds_two_per_tile(values in tiles(40)) {
        let mut sequence: TileSequence = values.into();
        let before = score(&sequence);

        sequence.increment_all();
        prop_assert_eq!(score(&sequence), before + 2 * sequence.len() as i64);
    }
}
