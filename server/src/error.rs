use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use todo_core::ErrorBody;

use crate::storage::RepositoryError;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body, query string or path did not bind.
    #[error("{0}")]
    Binding(String),
    #[error("invalid id {raw:?}: {source}")]
    InvalidId {
        raw: String,
        source: std::num::ParseIntError,
    },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl AppError {
    /// Pairs the error with the status code it is reported under.
    pub fn with_status(self, status: StatusCode) -> ErrorResponse {
        ErrorResponse {
            status,
            error: self,
        }
    }
}

/// An `AppError` rendered as `{"error": <message>}`.
#[derive(Debug)]
pub struct ErrorResponse {
    pub status: StatusCode,
    pub error: AppError,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        error.with_status(StatusCode::BAD_REQUEST)
    }
}

impl From<RepositoryError> for ErrorResponse {
    fn from(error: RepositoryError) -> Self {
        AppError::from(error).into()
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let message = self.error.to_string();
        tracing::warn!(status = %self.status, error = %message, "request failed");

        (self.status, Json(ErrorBody { error: message })).into_response()
    }
}
