//! HTTP routes and wire types.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use codebreaker::{
    Color, GameError, GameRegistry, GameView, GuessResult, NewGame, NewGameRequest,
};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tracing::{debug, error, info, instrument, warn};

/// Request body for submitting a guess.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRequest {
    /// Game handle returned at creation.
    pub id: String,
    /// One color index per position.
    pub guess: Vec<Color>,
}

/// Response body for a scored guess.
///
/// `secret` is only serialized when `lost` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    /// Exact matches.
    pub exact: usize,
    /// Partial matches.
    pub partial: usize,
    /// Attempts remaining.
    pub attempts_left: u32,
    /// The guess cracked the code.
    pub won: bool,
    /// Attempts are exhausted without a win.
    pub lost: bool,
    /// The secret, revealed on a loss.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<Vec<Color>>,
}

impl From<GuessResult> for GuessResponse {
    fn from(result: GuessResult) -> Self {
        Self {
            exact: *result.score().exact(),
            partial: *result.score().partial(),
            attempts_left: *result.attempts_left(),
            won: result.won(),
            lost: result.lost(),
            secret: result.secret().map(<[Color]>::to_vec),
        }
    }
}

/// Response body for the game view endpoint.
#[derive(Debug, Clone, Serialize)]
struct GameResponse {
    id: String,
    #[serde(flatten)]
    view: GameView,
}

/// Engine error mapped to an HTTP response.
#[derive(Debug, Display, Error, From)]
pub struct ApiError(GameError);

impl ApiError {
    /// Status code for the wrapped error: 4xx for caller faults, 5xx otherwise.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            GameError::GameNotFound { .. } => StatusCode::NOT_FOUND,
            GameError::InvalidGuess { .. } => StatusCode::BAD_REQUEST,
            GameError::RandomSource { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.0.is_client_fault() {
            warn!(%status, error = %self.0, "Rejected request");
        } else {
            error!(%status, error = %self.0, "Request failed");
        }
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Builds the application router around a shared registry.
#[instrument(skip(registry))]
pub fn router(registry: GameRegistry) -> Router {
    info!("Building API router");
    Router::new()
        .route("/api/new", post(new_game))
        .route("/api/guess", post(submit_guess))
        .route("/api/games/{id}", get(get_game))
        .route("/health", get(health))
        .with_state(registry)
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            debug!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
}

#[instrument(skip(registry))]
async fn new_game(
    State(registry): State<GameRegistry>,
    Json(req): Json<NewGameRequest>,
) -> Result<Json<NewGame>, ApiError> {
    let game = registry.create_game(&req)?;
    Ok(Json(game))
}

#[instrument(skip(registry, req), fields(game_id = %req.id))]
async fn submit_guess(
    State(registry): State<GameRegistry>,
    Json(req): Json<GuessRequest>,
) -> Result<Json<GuessResponse>, ApiError> {
    let result = registry.submit_guess(&req.id, &req.guess)?;
    Ok(Json(result.into()))
}

#[instrument(skip(registry))]
async fn get_game(
    State(registry): State<GameRegistry>,
    Path(id): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    let view = registry.view(&id)?;
    Ok(Json(GameResponse { id, view }))
}

async fn health() -> &'static str {
    "ok"
}

