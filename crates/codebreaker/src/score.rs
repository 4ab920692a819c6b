//! Guess scoring.

use crate::types::{Color, Score};
use std::collections::HashMap;

/// Scores `guess` against `secret`.
///
/// Exact matches are resolved first. Secret positions that did not match
/// exactly form the only pool partial matches draw from, so a color is never
/// credited more often than it remains unmatched in the secret.
///
/// Both slices must have the same length; callers validate this.
pub fn score(secret: &[Color], guess: &[Color]) -> Score {
    debug_assert_eq!(secret.len(), guess.len());

    let mut exact = 0;
    let mut remaining: HashMap<Color, usize> = HashMap::new();
    for (s, g) in secret.iter().zip(guess) {
        if s == g {
            exact += 1;
        } else {
            *remaining.entry(*s).or_default() += 1;
        }
    }

    let mut partial = 0;
    for (s, g) in secret.iter().zip(guess) {
        if s == g {
            continue;
        }
        if let Some(count) = remaining.get_mut(g) {
            if *count > 0 {
                partial += 1;
                *count -= 1;
            }
        }
    }

    Score::new(exact, partial)
}
