//! HTTP service for todo items.
//!
//! Routes:
//! - `GET /ping`
//! - `POST /v1/items`, `GET /v1/items`
//! - `GET|PATCH|DELETE /v1/items/{id}`

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;
pub mod storage;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::handlers::{create_item, delete_item, get_item, list_items, ping, update_item};

pub use crate::error::{AppError, ErrorResponse};
pub use crate::state::AppState;
pub use crate::storage::{ItemRepository, RepositoryError, SqliteRepository};

/// Build the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/v1/items", get(list_items).post(create_item))
        .route(
            "/v1/items/{id}",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the application on `listener` until the process is stopped.
pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}
