use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;
use wa_core::error::WordsError;
use wa_core::GameRecord;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordResponse {
    pub word: String,
}

#[derive(Debug, Deserialize)]
pub struct RandomParams {
    pub length: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateWordleRequest {
    #[serde(default)]
    pub word: Option<String>,
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn word_routes() -> Router<AppState> {
    Router::new()
        .route("/random", get(random_word))
        .route("/word", get(list_words))
        .route("/word/{word}", get(get_word))
}

pub fn wordle_routes() -> Router<AppState> {
    Router::new()
        .route("/wordle", post(create_wordle))
        .route("/wordle/{id}", get(get_wordle))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "words": state.words.list_all().len(),
        "ranked": state.words.ranked().len(),
        "pool_capacity": state.words.pool_capacity(),
        "storage": state.games.backend(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

/// Parse the `length` query parameter. Present but not a positive integer is
/// a client error.
fn parse_length(raw: Option<&str>) -> Result<Option<usize>, WordsError> {
    match raw {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(0) => Err(WordsError::InvalidLength("length must be at least 1".into())),
            Ok(n) => Ok(Some(n)),
            Err(_) => Err(WordsError::InvalidLength(format!("{raw:?} is not a number"))),
        },
    }
}

async fn random_word(
    State(state): State<AppState>,
    Query(params): Query<RandomParams>,
) -> Result<Json<WordResponse>, ApiError> {
    let length = parse_length(params.length.as_deref())?;
    match state.words.select_random(length) {
        Some(word) => Ok(Json(WordResponse { word: word.to_string() })),
        None => {
            let msg = match length {
                Some(n) => format!("no word with {n} characters"),
                None => "no words available".to_string(),
            };
            Err(ApiError::not_found(msg))
        }
    }
}

async fn get_word(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<WordResponse>, ApiError> {
    let entry = state.words.require(&word)?;
    Ok(Json(WordResponse { word: entry.clone() }))
}

async fn list_words(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.words.list_all().join("\n"),
    )
}

async fn create_wordle(
    State(state): State<AppState>,
    payload: Result<Json<CreateWordleRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload?;
    let word = req.word.ok_or_else(|| ApiError::bad_request("word is required"))?;
    let game = state.games.create(&word).await?;
    tracing::info!(id = %game.id, "created wordle");
    Ok(Json(json!({ "id": game.id })))
}

async fn get_wordle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GameRecord>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid id"))?;
    state
        .games
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("wordle {id} not found")))
}
