//! Run configuration.
//!
//! `GameConfig` describes one run of the program: which mode to play,
//! how big a dealt hand is, and how to seed the dealer. The CLI builds one
//! from its flags; library users build one with the `with_*` methods.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hand size used when dealing at random.
pub const DEFAULT_HAND_SIZE: usize = 100;

/// How moves are chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// A human enters moves one at a time.
    Interactive,
    /// The solver plays the whole hand.
    Ai,
}

/// Invalid configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Dealing zero tiles leaves nothing to play.
    #[error("hand size must be at least 1")]
    EmptyDeal,
}

/// Configuration for one run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Interactive or solver play.
    pub mode: Mode,

    /// Number of tiles dealt when no hand is supplied.
    pub hand_size: usize,

    /// Dealer seed. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Report solver progress once per opening tile.
    pub show_progress: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Ai,
            hand_size: DEFAULT_HAND_SIZE,
            seed: None,
            show_progress: true,
        }
    }
}

impl GameConfig {
    /// Set the play mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the dealt hand size.
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set a fixed dealer seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable progress reporting.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Check the configuration before use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyDeal);
        }
        Ok(())
    }
}
