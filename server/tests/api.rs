use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use todo_core::{ErrorBody, ItemPage, ItemStatus, TodoItem};
use todo_server::{app, AppState, SqliteRepository};
use tower::ServiceExt;

async fn test_app() -> Router {
    let repository = SqliteRepository::new_in_memory().await.unwrap();
    app(AppState::new(repository))
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

async fn send(app: &Router, request: Request<String>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn create(app: &Router, title: &str, description: &str) -> i64 {
    let body = serde_json::json!({"title": title, "description": description}).to_string();
    let resp = send(app, json_request("POST", "/v1/items", &body)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: serde_json::Value = body_json(resp).await;
    created["id"].as_i64().unwrap()
}

async fn get(app: &Router, id: i64) -> TodoItem {
    let resp = send(app, empty_request("GET", &format!("/v1/items/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    serde_json::from_value(body["data"].clone()).unwrap()
}

// --- ping ---

#[tokio::test]
async fn ping_returns_pong() {
    let app = test_app().await;
    let resp = send(&app, empty_request("GET", "/ping")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({"message": "pong"}));
}

// --- create ---

#[tokio::test]
async fn create_item_returns_id_and_defaults_to_doing() {
    let app = test_app().await;
    let id = create(&app, "title1", "description1").await;
    assert!(id > 0);

    let item = get(&app, id).await;
    assert_eq!(item.title, "title1");
    assert_eq!(item.description, "description1");
    assert_eq!(item.status, ItemStatus::Doing);
}

#[tokio::test]
async fn create_item_without_description() {
    let app = test_app().await;
    let resp = send(&app, json_request("POST", "/v1/items", r#"{"title":"bare"}"#)).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_item_missing_title_returns_400() {
    let app = test_app().await;
    let resp = send(
        &app,
        json_request("POST", "/v1/items", r#"{"description":"no title"}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert!(body.error.contains("title"), "unexpected error: {}", body.error);
}

#[tokio::test]
async fn create_item_blank_title_returns_400() {
    let app = test_app().await;
    let resp = send(&app, json_request("POST", "/v1/items", r#"{"title":"   "}"#)).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.error, "title must not be empty");
}

#[tokio::test]
async fn create_item_malformed_json_returns_400() {
    let app = test_app().await;
    let resp = send(&app, json_request("POST", "/v1/items", "{not json")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert!(body["error"].is_string());
}

// --- list ---

#[tokio::test]
async fn list_items_empty() {
    let app = test_app().await;
    let resp = send(&app, empty_request("GET", "/v1/items")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let page: ItemPage = body_json(resp).await;
    assert!(page.data.is_empty());
    assert_eq!(
        (page.paging.page, page.paging.limit, page.paging.total),
        (1, 10, 0)
    );
}

#[tokio::test]
async fn list_items_newest_first_with_total() {
    let app = test_app().await;
    let a = create(&app, "a", "").await;
    let b = create(&app, "b", "").await;
    let c = create(&app, "c", "").await;

    let resp = send(&app, empty_request("GET", "/v1/items?page=1&limit=10")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page: ItemPage = body_json(resp).await;

    let ids: Vec<i64> = page.data.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![c, b, a]);
    assert_eq!(page.paging.total, 3);
}

#[tokio::test]
async fn list_items_normalizes_paging() {
    let app = test_app().await;
    create(&app, "only", "").await;

    let resp = send(&app, empty_request("GET", "/v1/items?page=-3&limit=500")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page: ItemPage = body_json(resp).await;
    assert_eq!((page.paging.page, page.paging.limit), (1, 10));
    assert_eq!(page.data.len(), 1);
}

#[tokio::test]
async fn list_items_past_last_page_is_empty() {
    let app = test_app().await;
    create(&app, "one", "").await;

    let resp = send(&app, empty_request("GET", "/v1/items?page=9&limit=5")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page: ItemPage = body_json(resp).await;
    assert!(page.data.is_empty());
    assert_eq!(page.paging.total, 1);
}

#[tokio::test]
async fn list_items_empty_query_values_use_defaults() {
    let app = test_app().await;
    create(&app, "only", "").await;

    let resp = send(&app, empty_request("GET", "/v1/items?page=&limit=")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page: ItemPage = body_json(resp).await;
    assert_eq!((page.paging.page, page.paging.limit), (1, 10));
    assert_eq!(page.data.len(), 1);
}

#[tokio::test]
async fn list_items_ignores_caller_total() {
    let app = test_app().await;
    create(&app, "only", "").await;

    let resp = send(&app, empty_request("GET", "/v1/items?total=99")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page: ItemPage = body_json(resp).await;
    assert_eq!(page.paging.total, 1);
}

#[tokio::test]
async fn list_items_non_numeric_page_returns_400() {
    let app = test_app().await;
    let resp = send(&app, empty_request("GET", "/v1/items?page=first")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert!(body["error"].is_string());
}

// --- get ---

#[tokio::test]
async fn get_item_not_found_returns_400() {
    let app = test_app().await;
    let resp = send(&app, empty_request("GET", "/v1/items/999")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.error, "todo item not found: 999");
}

#[tokio::test]
async fn get_item_bad_id_returns_400() {
    let app = test_app().await;
    let resp = send(&app, empty_request("GET", "/v1/items/abc")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert!(body.error.starts_with("invalid id"));
}

#[tokio::test]
async fn get_item_invalid_utf8_id_returns_json_400() {
    let app = test_app().await;
    let resp = send(&app, empty_request("GET", "/v1/items/%FF")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert!(!body.error.is_empty());
}

// --- update ---

#[tokio::test]
async fn update_status_only_keeps_other_fields() {
    let app = test_app().await;
    let id = create(&app, "keep", "me").await;

    let resp = send(
        &app,
        json_request("PATCH", &format!("/v1/items/{id}"), r#"{"status":"Done"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({"ok": 1}));

    let item = get(&app, id).await;
    assert_eq!(item.title, "keep");
    assert_eq!(item.description, "me");
    assert_eq!(item.status, ItemStatus::Done);
}

#[tokio::test]
async fn update_missing_item_still_acknowledges() {
    let app = test_app().await;
    let resp = send(
        &app,
        json_request("PATCH", "/v1/items/4242", r#"{"title":"ghost"}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({"ok": 1}));

    let resp = send(&app, empty_request("GET", "/v1/items/4242")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_invalid_status_returns_400() {
    let app = test_app().await;
    let id = create(&app, "x", "").await;

    let resp = send(
        &app,
        json_request("PATCH", &format!("/v1/items/{id}"), r#"{"status":"Paused"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(get(&app, id).await.status, ItemStatus::Doing);
}

#[tokio::test]
async fn update_bad_id_returns_400() {
    let app = test_app().await;
    let resp = send(
        &app,
        json_request("PATCH", "/v1/items/one", r#"{"title":"t"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_hides_from_list_but_get_still_returns_it() {
    let app = test_app().await;
    let keep = create(&app, "keep", "").await;
    let gone = create(&app, "gone", "").await;

    let resp = send(&app, empty_request("DELETE", &format!("/v1/items/{gone}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({"ok": 1}));

    let resp = send(&app, empty_request("GET", "/v1/items")).await;
    let page: ItemPage = body_json(resp).await;
    let ids: Vec<i64> = page.data.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![keep]);
    assert_eq!(page.paging.total, 1);

    let item = get(&app, gone).await;
    assert_eq!(item.status, ItemStatus::Deleted);
}

#[tokio::test]
async fn delete_missing_item_still_acknowledges() {
    let app = test_app().await;
    let resp = send(&app, empty_request("DELETE", "/v1/items/31337")).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn delete_bad_id_returns_401() {
    let app = test_app().await;
    let resp = send(&app, empty_request("DELETE", "/v1/items/nope")).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorBody = body_json(resp).await;
    assert!(body.error.starts_with("invalid id"));
}

#[tokio::test]
async fn delete_invalid_utf8_id_returns_json_401() {
    let app = test_app().await;
    let resp = send(&app, empty_request("DELETE", "/v1/items/%FF")).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorBody = body_json(resp).await;
    assert!(!body.error.is_empty());
}
