//! Text rendering of tiles, lines and move logs.
//!
//! Move logs are shown in a compact code form: each value is offset by
//! `'0'` and printed as a character. Plain pips come out as digits; the
//! special values collide with the punctuation after `'9'` and are spelled
//! out through a fixed table:
//!
//! | code | shown as |
//! |------|----------|
//! | 59   | `11`     |
//! | 60   | `12`     |
//! | 69   | `21`     |
//!
//! ```
//! use linear_domino::core::{End, Move, MoveLog, Tile};
//! use linear_domino::render::render_moves;
//!
//! let log: MoveLog = vec![
//!     Move::new(End::Start, Tile::new(1, 2)),
//!     Move::new(End::Right, Tile::MIRROR),
//! ].into_iter().collect();
//!
//! assert_eq!(render_moves(&log), "S 1 2 R 12 21");
//! ```

use crate::core::{Move, MoveLog, TileSequence};

/// Decode one stored character code for display.
#[must_use]
pub fn decode_code(code: u8) -> String {
    match code {
        59 => "11".to_string(),
        60 => "12".to_string(),
        69 => "21".to_string(),
        other => char::from(other).to_string(),
    }
}

fn fits_code(value: i32) -> bool {
    u8::try_from(i64::from(value) + i64::from(b'0')).is_ok()
}

/// Decode a value code, falling back to decimal when the code was truncated.
fn decode_value(code: u8, value: i32) -> String {
    if fits_code(value) {
        decode_code(code)
    } else {
        value.to_string()
    }
}

/// Render a tile value through its character code.
///
/// Values whose code falls outside a byte are printed in decimal.
#[must_use]
pub fn render_value(value: i32) -> String {
    match u8::try_from(i64::from(value) + i64::from(b'0')) {
        Ok(code) => decode_code(code),
        Err(_) => value.to_string(),
    }
}

/// Render one move from its three-byte code form.
#[must_use]
pub fn render_move(mv: &Move) -> String {
    let [end, left, right] = mv.codes();
    format!(
        "{} {} {}",
        decode_code(end),
        decode_value(left, mv.tile.left),
        decode_value(right, mv.tile.right)
    )
}

/// Render a move log as space-separated `end left right` groups.
#[must_use]
pub fn render_moves(moves: &MoveLog) -> String {
    moves.iter().map(render_move).collect::<Vec<_>>().join(" ")
}

/// Render tiles as `[l|r][l|r]...`.
#[must_use]
pub fn render_tiles(tiles: &TileSequence) -> String {
    tiles.to_string()
}

/// Two-line view of the field and the hand.
#[must_use]
pub fn render_table(field: &TileSequence, hand: &TileSequence) -> String {
    format!("Field: {}\nHand: {}", render_tiles(field), render_tiles(hand))
}

/// Progress bar for opening tile `index` of `total`.
///
/// `width` cells, `|` for done and `_` for pending, then the percentage.
#[must_use]
pub fn progress_line(index: usize, total: usize, width: usize) -> String {
    let percent = if total == 0 { 100 } else { index * 100 / total };
    let filled = percent * width / 100;

    let bar: String = (0..width)
        .map(|cell| if cell < filled { '|' } else { '_' })
        .collect();

    format!("{} Loading: {}%", bar, percent)
}
