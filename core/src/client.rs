//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each endpoint is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. Every success reply of the service is a 200,
//! so parsing differs only in the expected body shape.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::paging::Paging;
use crate::types::{
    Ack, CreatedId, DataEnvelope, ErrorBody, ItemPage, Pong, TodoItem, TodoItemCreate,
    TodoItemUpdate,
};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_ping(&self) -> HttpRequest {
        self.bodyless(HttpMethod::Get, "/ping".to_string())
    }

    pub fn build_create_item(&self, input: &TodoItemCreate) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/v1/items".to_string(), input)
    }

    /// `None` leaves paging to the server defaults.
    pub fn build_list_items(&self, paging: Option<Paging>) -> HttpRequest {
        let path = match paging {
            Some(p) => format!("/v1/items?page={}&limit={}", p.page, p.limit),
            None => "/v1/items".to_string(),
        };
        self.bodyless(HttpMethod::Get, path)
    }

    pub fn build_get_item(&self, id: i64) -> HttpRequest {
        self.bodyless(HttpMethod::Get, format!("/v1/items/{id}"))
    }

    pub fn build_update_item(
        &self,
        id: i64,
        input: &TodoItemUpdate,
    ) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Patch, format!("/v1/items/{id}"), input)
    }

    pub fn build_delete_item(&self, id: i64) -> HttpRequest {
        self.bodyless(HttpMethod::Delete, format!("/v1/items/{id}"))
    }

    pub fn parse_ping(&self, response: HttpResponse) -> Result<String, ApiError> {
        parse_ok::<Pong>(response).map(|pong| pong.message)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<i64, ApiError> {
        parse_ok::<CreatedId>(response).map(|created| created.id)
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<ItemPage, ApiError> {
        parse_ok(response)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        parse_ok::<DataEnvelope<TodoItem>>(response).map(|envelope| envelope.data)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_ok::<Ack>(response).map(|_| ())
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_ok::<Ack>(response).map(|_| ())
    }

    fn bodyless(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn parse_ok<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-200 status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    match serde_json::from_str::<ErrorBody>(&response.body) {
        Ok(body) => Err(ApiError::Server {
            status: response.status,
            message: body.error,
        }),
        Err(_) => Err(ApiError::HttpError {
            status: response.status,
            body: response.body.clone(),
        }),
    }
}
