//! Text input: hands and moves as whitespace-separated tokens.
//!
//! A hand is a count followed by that many `left right` pairs. A move is an
//! end code and a tile: `R 3 4`. Line breaks carry no meaning.
//!
//! ```
//! use linear_domino::core::Tile;
//! use linear_domino::input::parse_hand;
//!
//! let hand = parse_hand("2\n1 2\n2 3").unwrap();
//! assert_eq!(hand.as_slice(), &[Tile::new(1, 2), Tile::new(2, 3)]);
//! ```

use std::collections::VecDeque;
use std::io::BufRead;

use thiserror::Error;

use crate::core::{End, Tile, TileSequence};

/// Malformed input.
#[derive(Debug, Error)]
pub enum InputError {
    /// Ran out of tokens while reading `what`.
    #[error("unexpected end of input while reading {what}")]
    UnexpectedEnd { what: &'static str },

    /// A token that should be an integer.
    #[error("expected an integer, found {0:?}")]
    InvalidNumber(String),

    /// A token that should be `S`, `L` or `R`.
    #[error("expected S, L or R, found {0:?}")]
    InvalidEnd(String),

    /// A negative tile count.
    #[error("tile count cannot be negative: {0}")]
    NegativeCount(i64),

    /// Reading from the underlying source failed.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Whitespace token stream over a buffered reader.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>, InputError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn expect_token(&mut self, what: &'static str) -> Result<String, InputError> {
        self.next_token()?
            .ok_or(InputError::UnexpectedEnd { what })
    }

    fn expect_int(&mut self, what: &'static str) -> Result<i64, InputError> {
        let token = self.expect_token(what)?;
        token
            .parse()
            .map_err(|_| InputError::InvalidNumber(token))
    }

    fn expect_value(&mut self, what: &'static str) -> Result<i32, InputError> {
        let token = self.expect_token(what)?;
        token
            .parse()
            .map_err(|_| InputError::InvalidNumber(token))
    }

    /// Read a count followed by that many tiles.
    pub fn read_hand(&mut self) -> Result<TileSequence, InputError> {
        let count = self.expect_int("tile count")?;
        if count < 0 {
            return Err(InputError::NegativeCount(count));
        }

        let mut hand = TileSequence::new();
        for _ in 0..count {
            let left = self.expect_value("tile left value")?;
            let right = self.expect_value("tile right value")?;
            hand.push_back(Tile::new(left, right));
        }
        Ok(hand)
    }

    /// Read one `end left right` triple, `None` at end of input.
    pub fn read_move(&mut self) -> Result<Option<(End, Tile)>, InputError> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };

        let mut chars = token.chars();
        let end = match (chars.next().and_then(End::from_code), chars.next()) {
            (Some(end), None) => end,
            _ => {
                // Drop the rest of the triple so the next read starts clean
                self.pending.clear();
                return Err(InputError::InvalidEnd(token));
            }
        };

        let left = self.expect_value("move left value")?;
        let right = self.expect_value("move right value")?;
        Ok(Some((end, Tile::new(left, right))))
    }
}

/// Parse a hand from a string.
pub fn parse_hand(text: &str) -> Result<TileSequence, InputError> {
    TokenReader::new(text.as_bytes()).read_hand()
}
