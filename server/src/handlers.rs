//! Item CRUD handlers.
//!
//! Each handler binds its input, runs one repository call (list runs two) and
//! renders either the success body or `{"error": ..}`. Every failure is a 400
//! except delete, which reports its failures as 401.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use todo_core::{
    Ack, CreatedId, DataEnvelope, ItemPage, Paging, Pong, TodoItem, TodoItemCreate,
    TodoItemUpdate,
};

use crate::{
    error::{AppError, ErrorResponse},
    state::AppState,
};

type HandlerResult<T> = Result<Json<T>, ErrorResponse>;

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|source| AppError::InvalidId {
        raw: raw.to_string(),
        source,
    })
}

fn bind_id(path: Result<Path<String>, PathRejection>) -> Result<i64, AppError> {
    let Path(raw) = path.map_err(|rejection| AppError::Binding(rejection.body_text()))?;
    parse_id(&raw)
}

fn bind_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::Binding(rejection.body_text()))
}

/// GET /ping
pub async fn ping() -> Json<Pong> {
    Json(Pong {
        message: "pong".to_string(),
    })
}

/// POST /v1/items
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<TodoItemCreate>, JsonRejection>,
) -> HandlerResult<CreatedId> {
    let input = bind_json(payload)?;
    if input.title.trim().is_empty() {
        return Err(AppError::Binding("title must not be empty".to_string()).into());
    }

    let id = state.items.create_item(&input).await?;
    tracing::debug!(id, "created todo item");

    Ok(Json(CreatedId { id }))
}

/// GET /v1/items?page=&limit=
pub async fn list_items(
    State(state): State<AppState>,
    query: Result<Query<Paging>, QueryRejection>,
) -> HandlerResult<ItemPage> {
    let Query(query) = query.map_err(|rejection| AppError::Binding(rejection.body_text()))?;

    // `total` is never taken from the caller.
    let mut paging = Paging::new(query.page, query.limit);
    paging.normalize();

    // Count and page are two separate statements; under concurrent writes
    // `total` may not match the returned rows.
    paging.total = state.items.count_items().await?;
    let data = state.items.list_items(&paging).await?;

    Ok(Json(ItemPage { data, paging }))
}

/// GET /v1/items/{id}
///
/// Returns soft-deleted items too; only the list view filters them.
pub async fn get_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> HandlerResult<DataEnvelope<TodoItem>> {
    let id = bind_id(path)?;
    let data = state.items.get_item(id).await?;

    Ok(Json(DataEnvelope { data }))
}

/// PATCH /v1/items/{id}
///
/// No existence check: an unknown id is acknowledged like any other.
pub async fn update_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<TodoItemUpdate>, JsonRejection>,
) -> HandlerResult<Ack> {
    let id = bind_id(path)?;
    let update = bind_json(payload)?;

    let rows = state.items.update_item(id, &update).await?;
    tracing::debug!(id, rows, "updated todo item");

    Ok(Json(Ack::OK))
}

/// DELETE /v1/items/{id}
///
/// Soft delete through its own statement, not the update path. Failures are
/// reported as 401.
pub async fn delete_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> HandlerResult<Ack> {
    let id = bind_id(path).map_err(|e| e.with_status(StatusCode::UNAUTHORIZED))?;

    let rows = state
        .items
        .soft_delete_item(id)
        .await
        .map_err(|e| AppError::from(e).with_status(StatusCode::UNAUTHORIZED))?;
    tracing::debug!(id, rows, "soft-deleted todo item");

    Ok(Json(Ack::OK))
}
