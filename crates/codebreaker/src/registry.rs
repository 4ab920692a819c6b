//! Shared collection of in-flight games.

use crate::error::GameError;
use crate::game::{Game, GuessResult};
use crate::params::{NewGameRequest, ParamLimits};
use crate::secret::SecretGenerator;
use crate::types::{Color, GameId, GameView, NewGame};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Fresh identifiers drawn before giving up on a create call.
const ID_DRAWS: usize = 4;

/// Owns every game and serializes access to them.
///
/// Cloning is cheap and yields a handle to the same games. One mutex covers
/// the whole map, so concurrent guesses against a game each see a
/// consistent pre-state and decrement its attempt counter exactly once.
/// Games are kept until the registry is dropped.
#[derive(Debug)]
pub struct GameRegistry<S = OsRng> {
    games: Arc<Mutex<HashMap<GameId, Game>>>,
    generator: SecretGenerator<S>,
    limits: ParamLimits,
}

impl<S> Clone for GameRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            games: Arc::clone(&self.games),
            generator: self.generator.clone(),
            limits: self.limits,
        }
    }
}

impl GameRegistry<OsRng> {
    /// Creates an empty registry with no parameter caps.
    #[instrument]
    pub fn new() -> Self {
        Self::with_limits(ParamLimits::unbounded())
    }

    /// Creates an empty registry that clamps parameters to `limits`.
    #[instrument]
    pub fn with_limits(limits: ParamLimits) -> Self {
        info!("Creating game registry");
        Self::with_generator(SecretGenerator::new(), limits)
    }
}

impl Default for GameRegistry<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> GameRegistry<S>
where
    S: RngCore + CryptoRng,
{
    /// Creates an empty registry drawing randomness from `generator`.
    pub fn with_generator(generator: SecretGenerator<S>, limits: ParamLimits) -> Self {
        Self {
            games: Arc::new(Mutex::new(HashMap::new())),
            generator,
            limits,
        }
    }

    /// Returns the parameter caps in force.
    pub fn limits(&self) -> &ParamLimits {
        &self.limits
    }

    /// Starts a new game and returns its handle and public view.
    ///
    /// Nothing is stored if the entropy source fails.
    #[instrument(skip(self))]
    pub fn create_game(&self, request: &NewGameRequest) -> Result<NewGame, GameError> {
        let params = request.resolve(&self.limits);
        let game = Game::new(self.generator.generate(&params)?, params);
        let view = game.view();

        let mut stored = None;
        for _ in 0..ID_DRAWS {
            let id = self.generator.game_id()?;
            let mut games = self.lock();
            if let Entry::Vacant(slot) = games.entry(id.clone()) {
                slot.insert(game);
                stored = Some(id);
                break;
            }
            drop(games);
            warn!(game_id = %id, "Game id collision, drawing again");
        }

        let Some(id) = stored else {
            return Err(GameError::RandomSource {
                message: format!("{} consecutive game id collisions", ID_DRAWS),
            });
        };
        info!(
            game_id = %id,
            code_length = params.code_length(),
            colors = params.colors(),
            attempts = params.attempts(),
            "Created game"
        );
        Ok(NewGame::new(id, view))
    }

    /// Scores `guess` against the game registered under `id`.
    #[instrument(skip(self, id, guess), fields(game_id = %id, guess_len = guess.len()))]
    pub fn submit_guess(&self, id: &str, guess: &[Color]) -> Result<GuessResult, GameError> {
        // Log only once the lock is released.
        let scored = match self.lock().get_mut(id) {
            Some(game) => game.guess(guess),
            None => Err(GameError::GameNotFound { id: id.to_string() }),
        };

        let result = scored.inspect_err(|e| debug!(error = %e, "Guess rejected"))?;
        info!(
            exact = result.score().exact(),
            partial = result.score().partial(),
            attempts_left = result.attempts_left(),
            won = result.won(),
            lost = result.lost(),
            "Guess evaluated"
        );
        Ok(result)
    }

    /// Returns the public view of the game registered under `id`.
    #[instrument(skip(self))]
    pub fn view(&self, id: &str) -> Result<GameView, GameError> {
        self.lock()
            .get(id)
            .map(Game::view)
            .ok_or_else(|| GameError::GameNotFound { id: id.to_string() })
    }

    /// Number of games held, concluded ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no game has been created yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Every critical section leaves the map consistent, so a poisoned lock
    // still guards valid data.
    fn lock(&self) -> MutexGuard<'_, HashMap<GameId, Game>> {
        self.games.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::Subscriber;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Counts events emitted while the registry map is locked.
    struct LockWatcher {
        games: Arc<Mutex<HashMap<GameId, Game>>>,
        events: Arc<AtomicUsize>,
        under_lock: Arc<AtomicUsize>,
    }

    impl<S: Subscriber> Layer<S> for LockWatcher {
        fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.events.fetch_add(1, Ordering::SeqCst);
            if self.games.try_lock().is_err() {
                self.under_lock.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_no_logging_under_lock() {
        let registry = GameRegistry::new();
        let events = Arc::new(AtomicUsize::new(0));
        let under_lock = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(LockWatcher {
            games: Arc::clone(&registry.games),
            events: Arc::clone(&events),
            under_lock: Arc::clone(&under_lock),
        });

        tracing::subscriber::with_default(subscriber, || {
            let game = registry
                .create_game(&NewGameRequest::new(4, 6, 2))
                .expect("Create failed");
            let id = game.id().as_str();
            registry.submit_guess(id, &[-1; 4]).expect("Guess failed");
            registry.submit_guess(id, &[-1; 4]).expect("Guess failed");
            registry
                .submit_guess(id, &[0; 3])
                .expect_err("Short guess accepted");
            registry
                .submit_guess("missing", &[0; 4])
                .expect_err("Unknown game accepted");
        });

        assert!(events.load(Ordering::SeqCst) > 0);
        assert_eq!(under_lock.load(Ordering::SeqCst), 0);
    }
}
