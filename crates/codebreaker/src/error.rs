//! Error types for game creation and guess evaluation.

use derive_more::{Display, Error};

/// Errors surfaced by the game engine.
///
/// [`GameError::GameNotFound`] and [`GameError::InvalidGuess`] are faults of
/// the caller and never mutate state. [`GameError::RandomSource`] is a server
/// fault: no game is created when it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The secure entropy source could not produce fresh randomness.
    #[display("Random source unavailable: {message}")]
    RandomSource {
        /// Description of the underlying failure.
        message: String,
    },

    /// No game is registered under the given identifier.
    #[display("Game not found: {id}")]
    GameNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// The guess does not have one color per secret position.
    #[display("Invalid guess: expected {expected} colors, got {actual}")]
    InvalidGuess {
        /// The game's code length.
        expected: usize,
        /// Length of the submitted guess.
        actual: usize,
    },
}

impl GameError {
    /// Returns true when the error was caused by the caller's input.
    pub fn is_client_fault(&self) -> bool {
        match self {
            Self::GameNotFound { .. } | Self::InvalidGuess { .. } => true,
            Self::RandomSource { .. } => false,
        }
    }
}

impl From<rand::Error> for GameError {
    fn from(err: rand::Error) -> Self {
        Self::RandomSource {
            message: err.to_string(),
        }
    }
}
