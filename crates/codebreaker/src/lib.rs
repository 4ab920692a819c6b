//! Codebreaker - game state and guess scoring for a Mastermind-style game
//!
//! A player asks for a new game, the engine draws a hidden secret from a
//! cryptographically secure source, and every guess is answered with the
//! number of exact and partial matches until the player wins or runs out of
//! attempts.
//!
//! # Architecture
//!
//! - **SecretGenerator**: secrets and opaque game ids from a CSPRNG
//! - **Scoring**: two-pass exact/partial evaluation
//! - **Game**: per-game record with a tagged guess outcome
//! - **GameRegistry**: shared, lock-guarded collection of in-flight games
//!
//! # Example
//!
//! ```
//! use codebreaker::{GameRegistry, GuessOutcome, NewGameRequest};
//!
//! # fn example() -> Result<(), codebreaker::GameError> {
//! let registry = GameRegistry::new();
//! let game = registry.create_game(&NewGameRequest::default())?;
//! assert_eq!(*game.view().code_length(), 4);
//!
//! // Color 99 is outside the alphabet, so this guess can never match.
//! let result = registry.submit_guess(game.id().as_str(), &[99, 99, 99, 99])?;
//! assert_eq!(*result.score().exact(), 0);
//! assert!(matches!(result.outcome(), GuessOutcome::Ongoing));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod params;
mod registry;
mod score;
mod secret;
mod types;

pub use error::GameError;
pub use game::{GuessOutcome, GuessResult};
pub use params::{
    DEFAULT_ATTEMPTS, DEFAULT_CODE_LENGTH, DEFAULT_COLORS, GameParams, NewGameRequest,
    ParamLimits,
};
pub use registry::GameRegistry;
pub use score::score;
pub use secret::SecretGenerator;
pub use types::{Color, GameId, GameView, NewGame, Score};
