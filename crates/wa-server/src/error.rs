//! JSON error responses for the HTTP API.
//!
//! Every failure, including request bodies axum cannot decode, leaves the
//! server as `{"error": {"code": ..., "message": ...}}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use wa_core::error::WordsError;
use wa_storage::StoreError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

#[derive(Serialize)]
struct Envelope<'a> {
    error: ErrorBody<'a>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
}

impl ApiError {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self { status, code, message: message.into() }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", msg)
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "bad_request", msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Envelope {
            error: ErrorBody { code: self.code, message: &self.message },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<WordsError> for ApiError {
    fn from(err: WordsError) -> Self {
        match &err {
            WordsError::NotFound { .. } => ApiError::not_found(err.to_string()),
            WordsError::InvalidLength(_) => ApiError::bad_request(err.to_string()),
            _ => ApiError::internal(err.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::InvalidWord(msg) => ApiError::bad_request(msg.clone()),
            #[allow(unreachable_patterns)]
            _ => {
                tracing::error!(error = %err, "game store failure");
                ApiError::internal("storage unavailable")
            }
        }
    }
}

/// Wrong content type, malformed JSON and wrong field types are all a 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(status = %rejection.status(), "rejected request body");
        ApiError::bad_request(format!("invalid request body: {}", rejection.body_text()))
    }
}
