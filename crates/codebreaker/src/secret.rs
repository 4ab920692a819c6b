//! Secret and identifier generation.
//!
//! Everything here is drawn from a cryptographically secure source. There is
//! no fallback: if the source fails, the caller gets
//! [`GameError::RandomSource`].

use crate::error::GameError;
use crate::params::GameParams;
use crate::types::{Color, GameId};
use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument, warn};

/// Number of random bytes in a game identifier (96 bits).
const ID_BYTES: usize = 12;

/// Produces secrets and game identifiers.
///
/// Generic over the entropy source so tests can substitute one; production
/// code uses the operating system source. Clones share one source, and every
/// draw advances it in place, so stateful generators never repeat output.
#[derive(Debug, Default)]
pub struct SecretGenerator<S = OsRng> {
    source: Arc<Mutex<S>>,
}

impl<S> Clone for SecretGenerator<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl SecretGenerator<OsRng> {
    /// Creates a generator backed by the operating system's entropy source.
    pub fn new() -> Self {
        Self::with_source(OsRng)
    }
}

impl<S> SecretGenerator<S>
where
    S: RngCore + CryptoRng,
{
    /// Creates a generator backed by the given source.
    pub fn with_source(source: S) -> Self {
        Self {
            source: Arc::new(Mutex::new(source)),
        }
    }

    /// Draws a secret of `code_length` colors, each uniform over `[0, colors)`.
    #[instrument(skip(self))]
    pub fn generate(&self, params: &GameParams) -> Result<Vec<Color>, GameError> {
        let mut rng = self.seeded_rng()?;
        let colors = Color::from(params.colors());
        let secret = (0..params.code_length())
            .map(|_| rng.gen_range(0..colors))
            .collect();
        debug!("Secret generated");
        Ok(secret)
    }

    /// Draws a fresh opaque game identifier.
    #[instrument(skip(self))]
    pub fn game_id(&self) -> Result<GameId, GameError> {
        let mut bytes = [0u8; ID_BYTES];
        let drawn = self.source().try_fill_bytes(&mut bytes);
        drawn.map_err(|e| {
            warn!(error = %e, "Entropy source failed while drawing game id");
            GameError::from(e)
        })?;
        Ok(GameId::from_bytes(&bytes))
    }

    fn seeded_rng(&self) -> Result<StdRng, GameError> {
        let seeded = StdRng::from_rng(&mut *self.source());
        seeded.map_err(|e| {
            warn!(error = %e, "Entropy source failed while seeding secret");
            GameError::from(e)
        })
    }

    // Draws never leave the source half-updated, so a poisoned lock is safe
    // to reuse.
    fn source(&self) -> MutexGuard<'_, S> {
        self.source.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::NewGameRequest;

    #[derive(Debug, Clone)]
    struct BrokenSource;

    impl RngCore for BrokenSource {
        fn next_u32(&mut self) -> u32 {
            panic!("infallible draw from broken source")
        }

        fn next_u64(&mut self) -> u64 {
            panic!("infallible draw from broken source")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("infallible draw from broken source")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy unavailable"))
        }
    }

    impl CryptoRng for BrokenSource {}

    #[test]
    fn test_secret_shape() {
        let params = NewGameRequest::new(7, 3, 1).resolve(&Default::default());
        let secret = SecretGenerator::new().generate(&params).expect("Generate failed");
        assert_eq!(secret.len(), 7);
        assert!(secret.iter().all(|c| *c < 3));
    }

    #[test]
    fn test_single_color_secret() {
        let params = NewGameRequest::new(5, 1, 1).resolve(&Default::default());
        let secret = SecretGenerator::new().generate(&params).expect("Generate failed");
        assert_eq!(secret, vec![0; 5]);
    }

    #[test]
    fn test_every_color_reachable() {
        let params = NewGameRequest::new(600, 6, 1).resolve(&Default::default());
        let secret = SecretGenerator::new().generate(&params).expect("Generate failed");
        for color in 0..6 {
            assert!(secret.contains(&color), "color {} never drawn", color);
        }
    }

    #[test]
    fn test_game_id_format() {
        let id = SecretGenerator::new().game_id().expect("Id failed");
        assert_eq!(id.as_str().len(), 24);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_game_ids_differ() {
        let generator = SecretGenerator::new();
        let a = generator.game_id().expect("Id failed");
        let b = generator.game_id().expect("Id failed");
        assert_ne!(a, b);
    }

    #[test]
    fn test_seeded_source_advances_between_draws() {
        let generator = SecretGenerator::with_source(StdRng::seed_from_u64(42));
        let params = NewGameRequest::new(16, 6, 1).resolve(&Default::default());

        let first_id = generator.game_id().expect("Id failed");
        let second_id = generator.clone().game_id().expect("Id failed");
        assert_ne!(first_id, second_id);

        let first = generator.generate(&params).expect("Generate failed");
        let second = generator.clone().generate(&params).expect("Generate failed");
        assert_ne!(first, second);
    }

    #[test]
    fn test_broken_source_fails() {
        let generator = SecretGenerator::with_source(BrokenSource);
        let params = GameParams::default();
        assert!(matches!(
            generator.generate(&params),
            Err(GameError::RandomSource { .. })
        ));
        assert!(matches!(
            generator.game_id(),
            Err(GameError::RandomSource { .. })
        ));
    }
}
