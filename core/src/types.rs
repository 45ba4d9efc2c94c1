//! Domain DTOs for the todo API.
//!
//! # Design
//! The three item shapes all describe rows of the `todo_items` table. The
//! server serializes them and the client deserializes them, so both sides of
//! the wire share one definition. Response envelopes live here for the same
//! reason.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::paging::Paging;
use crate::status::ItemStatus;

/// A full todo item row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: ItemStatus,
    pub int_example: i64,
    pub double_example: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request payload for creating a new item. Storage assigns the id and the
/// initial `Doing` status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItemCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Request payload for updating an item. Only the fields present in the JSON
/// are written; omitted fields remain unchanged in storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
}

impl TodoItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

/// `{"id": ..}` returned by create.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedId {
    pub id: i64,
}

/// `{"data": ..}` wrapper for single-item responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// One page of items plus its paging block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemPage {
    pub data: Vec<TodoItem>,
    pub paging: Paging,
}

/// `{"ok": 1}` acknowledgment returned by update and delete.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    pub ok: u8,
}

impl Ack {
    pub const OK: Ack = Ack { ok: 1 };
}

/// `{"message": ..}` returned by the ping endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pong {
    pub message: String,
}

/// `{"error": ..}` body of every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
