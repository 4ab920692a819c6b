//! Per-game record and guess outcomes.

use crate::error::GameError;
use crate::params::GameParams;
use crate::score::score;
use crate::types::{Color, GameView, Score};
use derive_getters::Getters;

/// Outcome of a scored guess.
///
/// The secret is only reachable through [`GuessOutcome::Lost`]; it is never
/// handed out while the game is running or after a win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The player still has attempts and has not cracked the code.
    Ongoing,
    /// Every position matched exactly.
    Won,
    /// Attempts are exhausted without a win.
    Lost {
        /// The secret the player failed to find.
        secret: Vec<Color>,
    },
}

/// Feedback returned for a guess.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GuessResult {
    /// Exact and partial match counts.
    score: Score,
    /// Attempts remaining after this guess.
    attempts_left: u32,
    /// Whether the game is running, won, or lost.
    outcome: GuessOutcome,
}

impl GuessResult {
    /// Returns true if this guess cracked the code.
    pub fn won(&self) -> bool {
        matches!(self.outcome, GuessOutcome::Won)
    }

    /// Returns true if the player has run out of attempts without winning.
    pub fn lost(&self) -> bool {
        matches!(self.outcome, GuessOutcome::Lost { .. })
    }

    /// Returns the revealed secret, present only on a loss.
    pub fn secret(&self) -> Option<&[Color]> {
        match &self.outcome {
            GuessOutcome::Lost { secret } => Some(secret),
            GuessOutcome::Ongoing | GuessOutcome::Won => None,
        }
    }
}

/// One match, active or concluded.
///
/// Concluded games are kept and still score guesses; the attempt counter
/// stays at zero once it gets there.
#[derive(Debug, Clone)]
pub(crate) struct Game {
    secret: Vec<Color>,
    params: GameParams,
    attempts_left: u32,
}

impl Game {
    /// Creates a game with a full attempt budget.
    pub(crate) fn new(secret: Vec<Color>, params: GameParams) -> Self {
        debug_assert_eq!(secret.len(), params.code_length());
        Self {
            secret,
            attempts_left: params.attempts(),
            params,
        }
    }

    /// Returns the public view of this game.
    pub(crate) fn view(&self) -> GameView {
        GameView::new(
            self.params.code_length(),
            self.params.colors(),
            self.params.attempts(),
            self.attempts_left,
        )
    }

    /// Scores a guess and advances the attempt counter.
    ///
    /// A guess of the wrong length is rejected without consuming an attempt.
    /// Runs under the registry lock, so it does not log.
    pub(crate) fn guess(&mut self, guess: &[Color]) -> Result<GuessResult, GameError> {
        if guess.len() != self.secret.len() {
            return Err(GameError::InvalidGuess {
                expected: self.secret.len(),
                actual: guess.len(),
            });
        }

        let score = score(&self.secret, guess);
        self.attempts_left = self.attempts_left.saturating_sub(1);

        let outcome = if *score.exact() == self.secret.len() {
            GuessOutcome::Won
        } else if self.attempts_left == 0 {
            GuessOutcome::Lost {
                secret: self.secret.clone(),
            }
        } else {
            GuessOutcome::Ongoing
        };

        Ok(GuessResult {
            score,
            attempts_left: self.attempts_left,
            outcome,
        })
    }
}
