//! Crate error type for the outer layers.
//!
//! The rules and the solver never fail: illegal moves are simply not
//! applied, and broken invariants panic. Errors only arise while reading
//! input and checking configuration.

use crate::core::ConfigError;
use crate::input::InputError;

/// Main error type for linear-domino.
#[derive(Debug, thiserror::Error)]
pub enum DominoError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DominoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let err: DominoError = ConfigError::EmptyDeal.into();
        assert!(matches!(err, DominoError::Config(ConfigError::EmptyDeal)));
        assert_eq!(err.to_string(), "Config error: hand size must be at least 1");
    }

    #[test]
    fn test_input_error_message() {
        let err: DominoError = InputError::InvalidEnd("Q".to_string()).into();
        assert_eq!(err.to_string(), "Input error: expected S, L or R, found \"Q\"");
    }
}
