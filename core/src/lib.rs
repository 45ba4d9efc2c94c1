//! Shared types and a synchronous API client for the todo item service.
//!
//! # Overview
//! - `status`: the `ItemStatus` enum with its JSON and SQL encodings.
//! - `types`: the item row, create and update payloads, response envelopes.
//! - `paging`: page/limit normalization.
//! - `client`: builds `HttpRequest` values and parses `HttpResponse` values
//!   without touching the network (host-does-IO pattern).
//!
//! The server crate serializes the same types the client deserializes, so a
//! schema change shows up on both sides at compile time.

pub mod client;
pub mod error;
pub mod http;
pub mod paging;
pub mod status;
pub mod types;

pub use client::TodoClient;
pub use error::{ApiError, StatusError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use paging::Paging;
pub use status::ItemStatus;
pub use types::{
    Ack, CreatedId, DataEnvelope, ErrorBody, ItemPage, Pong, TodoItem, TodoItemCreate,
    TodoItemUpdate,
};
