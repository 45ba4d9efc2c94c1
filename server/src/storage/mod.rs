//! Storage for todo items.
//!
//! Handlers talk to an `ItemRepository` trait object held in `AppState`; the
//! SQLite implementation uses `rusqlite` for the statements and
//! `tokio-rusqlite` to run them off the async runtime.

mod conversions;
mod error;
mod schema;
mod sqlite;

use async_trait::async_trait;

use todo_core::{Paging, TodoItem, TodoItemCreate, TodoItemUpdate};

pub use error::{RepositoryError, Result};
pub use sqlite::SqliteRepository;

/// Repository for todo item operations.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Inserts a new item and returns the id storage assigned to it.
    async fn create_item(&self, item: &TodoItemCreate) -> Result<i64>;

    /// Counts items whose status is not `Deleted`.
    async fn count_items(&self) -> Result<i64>;

    /// Lists one page of items whose status is not `Deleted`, newest id first.
    async fn list_items(&self, paging: &Paging) -> Result<Vec<TodoItem>>;

    /// Gets an item by id regardless of its status.
    async fn get_item(&self, id: i64) -> Result<TodoItem>;

    /// Applies the present fields of `update`. Returns the number of rows
    /// touched; an unknown id is not an error.
    async fn update_item(&self, id: i64, update: &TodoItemUpdate) -> Result<usize>;

    /// Marks an item `Deleted`. Returns the number of rows touched.
    async fn soft_delete_item(&self, id: i64) -> Result<usize>;
}
