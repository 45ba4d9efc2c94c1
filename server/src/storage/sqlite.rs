//! SQLite repository implementation.

use async_trait::async_trait;
use rusqlite::params_from_iter;
use tokio_rusqlite::Connection;

use todo_core::{Paging, TodoItem, TodoItemCreate, TodoItemUpdate};

use super::conversions::{row_to_item, update_assignments};
use super::error::{
    map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id, wrap_err, RepositoryError,
    Result,
};
use super::{schema, ItemRepository};

/// SQLite-backed item repository.
///
/// `tokio_rusqlite::Connection` hands every closure to a single background
/// thread that owns the database connection, so statements from concurrent
/// requests run one at a time in arrival order.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) the database at `path` and bootstraps the schema.
    /// `:memory:` opens a private in-memory database.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;
        tracing::debug!(path, "sqlite repository ready");

        Ok(Self { conn })
    }

    /// Creates a repository over a fresh in-memory database.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl ItemRepository for SqliteRepository {
    async fn create_item(&self, item: &TodoItemCreate) -> Result<i64> {
        let title = item.title.clone();
        let description = item.description.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_ITEM, rusqlite::params![title, description])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn count_items(&self) -> Result<i64> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::COUNT_LIVE_ITEMS, [], |row| row.get(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_items(&self, paging: &Paging) -> Result<Vec<TodoItem>> {
        let limit = paging.limit;
        let offset = paging.offset();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_LIVE_ITEMS_PAGE)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params![limit, offset], row_to_item)
                    .map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_item(&self, id: i64) -> Result<TodoItem> {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_ITEM_BY_ID, [id], row_to_item)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn update_item(&self, id: i64, update: &TodoItemUpdate) -> Result<usize> {
        if update.is_empty() {
            return Ok(0);
        }
        let assignments = update_assignments(update);

        let columns: Vec<&str> = assignments.iter().map(|(column, _)| *column).collect();
        let sql = schema::update_item_sql(&columns);
        let mut values: Vec<rusqlite::types::Value> = assignments
            .into_iter()
            .map(|(_, value)| rusqlite::types::Value::Text(value))
            .collect();
        values.push(rusqlite::types::Value::Integer(id));

        self.conn
            .call(move |conn| {
                conn.execute(&sql, params_from_iter(values))
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn soft_delete_item(&self, id: i64) -> Result<usize> {
        self.conn
            .call(move |conn| conn.execute(schema::SOFT_DELETE_ITEM, [id]).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }
}
