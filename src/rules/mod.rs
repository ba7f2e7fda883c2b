//! Rules engine trait and scoring.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for a field
//! - How a move modifies the field and hand
//! - When play has run out
//!
//! Scoring is shared: every variant sums tile values.

pub mod engine;
pub mod scoring;

pub use engine::RulesEngine;
pub use scoring::score;
