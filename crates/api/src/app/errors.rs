use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use userd_core::DomainError;
use userd_infra::user_store::StoreError;

/// Failure reason reported by a handler.
///
/// Every variant is written to the client as HTTP 400 with the
/// `{"error": "<message>"}` envelope; client faults and store faults are not
/// distinguished on the wire.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Id parsing and other domain-level failures.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Store-level failure (missing row, connectivity, bad statement).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body was not valid JSON of the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Decode(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        json_error(StatusCode::BAD_REQUEST, self.to_string())
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}
