//! Repository errors and their mapping from `rusqlite` / `tokio-rusqlite`.

use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("todo item not found: {id}")]
    NotFound { id: i64 },
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    /// A stored value that does not decode, e.g. an unknown status string.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Wraps a rusqlite error for use inside `tokio_rusqlite` closures.
pub(crate) fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

fn map_rusqlite_error(err: &rusqlite::Error, id: Option<i64>) -> RepositoryError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => match id {
            Some(id) => RepositoryError::NotFound { id },
            None => RepositoryError::QueryFailed(err.to_string()),
        },
        rusqlite::Error::FromSqlConversionFailure(..) => {
            RepositoryError::InvalidData(err.to_string())
        }
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("cannot open database: {err}"))
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a `tokio_rusqlite` error to a `RepositoryError`.
pub(crate) fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> RepositoryError {
    map_error(err, None)
}

/// Like `map_tokio_rusqlite_error`, but a missing row becomes `NotFound { id }`.
pub(crate) fn map_tokio_rusqlite_error_with_id(
    err: tokio_rusqlite::Error,
    id: i64,
) -> RepositoryError {
    map_error(err, Some(id))
}

fn map_error(err: tokio_rusqlite::Error, id: Option<i64>) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err, id),
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
