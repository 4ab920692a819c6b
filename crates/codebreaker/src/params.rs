//! Game parameters: request defaults and optional upper bounds.

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Code length used when a request omits it or asks for a non-positive one.
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// Alphabet size used when a request omits it or asks for a non-positive one.
pub const DEFAULT_COLORS: u32 = 6;

/// Attempt budget used when a request omits it or asks for a non-positive one.
pub const DEFAULT_ATTEMPTS: u32 = 10;

/// Caller-supplied parameters for a new game.
///
/// Every field is optional; absent and non-positive values fall back to the
/// defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameRequest {
    /// Requested number of positions.
    pub code_length: Option<i64>,
    /// Requested alphabet size.
    pub colors: Option<i64>,
    /// Requested attempt budget.
    pub attempts: Option<i64>,
}

impl NewGameRequest {
    /// Creates a request with all three values given.
    pub fn new(code_length: i64, colors: i64, attempts: i64) -> Self {
        Self {
            code_length: Some(code_length),
            colors: Some(colors),
            attempts: Some(attempts),
        }
    }

    /// Applies defaults and caps, yielding parameters a game can be built from.
    #[instrument(skip(limits))]
    pub fn resolve(&self, limits: &ParamLimits) -> GameParams {
        let code_length = pick(
            "code_length",
            self.code_length,
            DEFAULT_CODE_LENGTH as u64,
            limits.max_code_length.map(|max| max as u64),
        );
        let colors = pick(
            "colors",
            self.colors,
            u64::from(DEFAULT_COLORS),
            limits.max_colors.map(u64::from),
        );
        let attempts = pick(
            "attempts",
            self.attempts,
            u64::from(DEFAULT_ATTEMPTS),
            limits.max_attempts.map(u64::from),
        );

        GameParams {
            code_length: usize::try_from(code_length).unwrap_or(usize::MAX),
            colors: u32::try_from(colors).unwrap_or(u32::MAX),
            attempts: u32::try_from(attempts).unwrap_or(u32::MAX),
        }
    }
}

fn pick(name: &'static str, requested: Option<i64>, default: u64, cap: Option<u64>) -> u64 {
    let value = match requested {
        Some(v) if v > 0 => v as u64,
        _ => default,
    };
    match cap {
        Some(max) if value > max => {
            let max = max.max(1);
            warn!(param = name, requested = value, max, "Clamping game parameter");
            max
        }
        _ => value,
    }
}

/// Optional upper bounds on game parameters.
///
/// `None` leaves a parameter unbounded. A value above its bound is clamped to
/// the bound rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamLimits {
    /// Largest allowed code length.
    pub max_code_length: Option<usize>,
    /// Largest allowed alphabet size.
    pub max_colors: Option<u32>,
    /// Largest allowed attempt budget.
    pub max_attempts: Option<u32>,
}

impl ParamLimits {
    /// No bounds at all.
    pub fn unbounded() -> Self {
        Self::default()
    }
}

/// Resolved, strictly positive game parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameParams {
    code_length: usize,
    colors: u32,
    attempts: u32,
}

impl GameParams {
    /// Number of positions in the secret.
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Size of the color alphabet.
    pub fn colors(&self) -> u32 {
        self.colors
    }

    /// Attempt budget.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl Default for GameParams {
    fn default() -> Self {
        NewGameRequest::default().resolve(&ParamLimits::unbounded())
    }
}
