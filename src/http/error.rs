use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::auto::InputError;
use crate::store::StoreError;

/// Errors surfaced by the HTTP handlers. Every variant renders as
/// `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Input(#[from] InputError),
    /// The path id is not a positive integer, so no record can match it.
    #[error("Auto no encontrado")]
    UnknownId(String),
    /// The request body is not valid JSON.
    #[error("JSON inválido")]
    MalformedJson(#[source] serde_json::Error),
}

impl ApiError {
    /// Map this error to its HTTP status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound(_)) | ApiError::UnknownId(_) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Input(_) | ApiError::MalformedJson(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            match &self {
                ApiError::MalformedJson(e) => warn!(error = %e, "request rejected: malformed JSON"),
                other => warn!(error = %other, status = status.as_u16(), "request rejected"),
            }
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
