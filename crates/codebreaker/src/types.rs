//! Core domain types shared by the engine and its callers.

use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Index into the color alphabet of a game.
///
/// Signed so that any integer a caller guesses can be scored; values outside
/// `[0, colors)` simply never match.
pub type Color = i64;

/// Opaque handle for a registered game.
///
/// Rendered as lowercase hex. Callers must not parse or predict it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Hex-encodes raw identifier bytes.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for GameId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GameId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Feedback for a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Score {
    /// Positions where the guessed color equals the secret color.
    exact: usize,
    /// Guessed colors present elsewhere in the secret, counted once per
    /// unmatched secret position.
    partial: usize,
}

/// Public parameters and progress of a game. Never carries the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    /// Number of positions in the secret.
    code_length: usize,
    /// Size of the color alphabet.
    colors: u32,
    /// Attempt budget the game started with.
    attempts_max: u32,
    /// Attempts the player still has.
    attempts_left: u32,
}

/// A freshly created game: its handle plus its public view.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, new)]
pub struct NewGame {
    /// Handle for subsequent guesses.
    id: GameId,
    /// Public parameters of the game.
    #[serde(flatten)]
    view: GameView,
}
