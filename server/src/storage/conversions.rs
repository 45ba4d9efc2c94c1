//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite values and domain types.

use chrono::{DateTime, Utc};
use rusqlite::types::{Type, ValueRef};
use rusqlite::Row;

use todo_core::{ItemStatus, TodoItem, TodoItemUpdate};

const STATUS_COLUMN: usize = 3;

/// Convert a SQLite row to a TodoItem.
///
/// Expected columns: id, title, description, status, int_example,
/// double_example, created_at, updated_at
pub fn row_to_item(row: &Row) -> rusqlite::Result<TodoItem> {
    let description: Option<String> = row.get(2)?;
    let created_at: Option<String> = row.get(6)?;
    let updated_at: Option<String> = row.get(7)?;

    Ok(TodoItem {
        id: row.get(0)?,
        title: row.get(1)?,
        description: description.unwrap_or_default(),
        status: status_from_sql(STATUS_COLUMN, row.get_ref(STATUS_COLUMN)?)?,
        int_example: row.get(4)?,
        double_example: row.get(5)?,
        created_at: created_at.as_deref().map(|s| parse_datetime(6, s)).transpose()?,
        updated_at: updated_at.as_deref().map(|s| parse_datetime(7, s)).transpose()?,
    })
}

/// Decode the status column from the raw value the driver returns.
pub fn status_from_sql(column: usize, value: ValueRef<'_>) -> rusqlite::Result<ItemStatus> {
    let (bytes, ty) = match value {
        ValueRef::Text(bytes) => (bytes, Type::Text),
        ValueRef::Blob(bytes) => (bytes, Type::Blob),
        other => {
            return Err(rusqlite::Error::InvalidColumnType(
                column,
                "status".to_string(),
                other.data_type(),
            ))
        }
    };
    ItemStatus::from_sql_bytes(bytes)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, ty, Box::new(e)))
}

/// Column/value pairs for the fields present in a partial update, in a fixed
/// column order.
pub fn update_assignments(update: &TodoItemUpdate) -> Vec<(&'static str, String)> {
    let mut assignments = Vec::new();
    if let Some(title) = &update.title {
        assignments.push(("title", title.clone()));
    }
    if let Some(description) = &update.description {
        assignments.push(("description", description.clone()));
    }
    if let Some(status) = ItemStatus::to_sql(update.status) {
        assignments.push(("status", status.to_string()));
    }
    assignments
}

/// Parse a datetime from RFC 3339 text.
fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}
