//! Random hand dealing.
//!
//! Hands are drawn with replacement from a fixed 39-entry alphabet: the 36
//! numbered tiles `11` through `66` (tens digit left, units digit right),
//! then the `sum`, `any` and `mirror` specials.

use log::debug;

use crate::core::{GameRng, Tile, TileSequence};

/// Every tile the dealer can produce, in draw-index order.
pub const ALPHABET: [Tile; 39] = build_alphabet();

const fn build_alphabet() -> [Tile; 39] {
    let mut tiles = [Tile::WILDCARD; 39];
    let mut i = 0;
    while i < 36 {
        tiles[i] = Tile::new((i / 6) as i32 + 1, (i % 6) as i32 + 1);
        i += 1;
    }
    tiles[36] = Tile::INCREMENT;
    tiles[37] = Tile::WILDCARD;
    tiles[38] = Tile::MIRROR;
    tiles
}

/// Deal `size` tiles uniformly at random from [`ALPHABET`].
pub fn deal_hand(rng: &mut GameRng, size: usize) -> TileSequence {
    let hand: TileSequence = (0..size)
        .map(|_| ALPHABET[rng.gen_range_usize(0..ALPHABET.len())])
        .collect();

    debug!(
        "dealt {} tiles with seed {} ({} special)",
        hand.len(),
        rng.seed(),
        hand.iter().filter(|t| t.is_special()).count()
    );

    hand
}
