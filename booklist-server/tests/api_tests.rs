//! Integration tests for the BookList server

use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use axum_test::TestServer;
use booklist_core::{BookRecord, Catalog, GoogleBooksCatalog, StaticCatalog, MAX_RESULTS};
use booklist_server::config::ServerConfig;
use booklist_server::routes::create_router;
use booklist_server::state::AppState;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

fn fixtures() -> Vec<BookRecord> {
    vec![
        BookRecord::new("rust-1")
            .with_title("Programming Rust")
            .with_author("Jim Blandy, Jason Orendorff")
            .with_year("2017")
            .with_description("r".repeat(130)),
        BookRecord::new("rust-2")
            .with_title("Rust for Rustaceans")
            .with_author("Jon Gjengset"),
        BookRecord::new("dune")
            .with_title("Dune")
            .with_author("Frank Herbert"),
    ]
}

/// Create a test server over an in-memory catalog
fn create_test_server_with(catalog: Arc<dyn Catalog>) -> (TestServer, AppState) {
    let state = AppState::with_catalog(ServerConfig::default(), catalog);
    let app = create_router(state.clone());
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, state)
}

fn create_test_server() -> (TestServer, AppState) {
    create_test_server_with(Arc::new(StaticCatalog::new(fixtures())))
}

// =============================================================================
// JSON API
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let (server, _state) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_books_empty_initially() {
    let (server, _state) = create_test_server();

    let response = server.get("/api/v1/books").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["results"].as_array().unwrap().len(), 0);
    assert_eq!(body["my_books"].as_array().unwrap().len(), 0);
    assert_eq!(body["busy"], false);
}

#[tokio::test]
async fn test_initial_load_populates_results() {
    let (server, state) = create_test_server_with(Arc::new(StaticCatalog::new(vec![
        BookRecord::new("p1").with_title("Programming Pearls"),
    ])));

    state.spawn_initial_load().await.unwrap();

    let body: Value = server.get("/api/v1/books").await.json();
    assert_eq!(body["results"][0]["id"], "p1");
}

#[tokio::test]
async fn test_search_returns_normalized_cards() {
    let (server, _state) = create_test_server();

    let response = server
        .post("/api/v1/search")
        .json(&json!({ "query": "rust" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["ok"], true);
    assert_eq!(body["outcome"]["kind"], "searched");
    assert_eq!(body["outcome"]["count"], 2);

    let first = &body["state"]["results"][0];
    assert_eq!(first["title"], "Programming Rust");
    assert_eq!(first["status"], "want-to-read");
    assert_eq!(first["description"], format!("{}...", "r".repeat(100)));
}

#[tokio::test]
async fn test_blank_search_rejected() {
    let (server, _state) = create_test_server();

    let response = server
        .post("/api/v1/search")
        .json(&json!({ "query": "   " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "empty_query");
    assert_eq!(body["message"], "Please enter a search term!");
}

#[tokio::test]
async fn test_search_catalog_failure() {
    let (server, _state) = create_test_server_with(Arc::new(StaticCatalog::unavailable()));

    let response = server
        .post("/api/v1/search")
        .json(&json!({ "query": "rust" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["message"], "Error searching books. Please try again.");
    assert_eq!(body["state"]["busy"], false);
}

#[tokio::test]
async fn test_add_book_twice() {
    let (server, _state) = create_test_server();
    server
        .post("/api/v1/search")
        .json(&json!({ "query": "dune" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/v1/my-books")
        .json(&json!({ "id": "dune" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Book added to your personal list!");
    assert_eq!(body["state"]["my_books"].as_array().unwrap().len(), 1);

    let response = server
        .post("/api/v1/my-books")
        .json(&json!({ "id": "dune" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "already_in_list");
    assert_eq!(body["message"], "Book already in your list!");
    assert_eq!(body["state"]["my_books"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_unknown_book() {
    let (server, _state) = create_test_server();

    let response = server
        .post("/api/v1/my-books")
        .json(&json!({ "id": "missing" }))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "unknown_book");
}

#[tokio::test]
async fn test_create_book_requires_author() {
    let (server, state) = create_test_server();

    let response = server
        .post("/api/v1/my-books/new")
        .json(&json!({ "title": "Dune" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Please fill in Title and Author!");
    assert_eq!(body["state"]["my_books"].as_array().unwrap().len(), 0);

    // The page's manual-entry form does not pick up API drafts
    assert_eq!(body["state"]["draft"]["title"], "");
    assert!(state.tracker.view().await.draft.is_empty());
    let html = server.get("/").await.text();
    assert!(!html.contains("value=\"Dune\""));
}

#[tokio::test]
async fn test_create_book_with_defaults() {
    let (server, _state) = create_test_server();

    let response = server
        .post("/api/v1/my-books/new")
        .json(&json!({ "title": "Dune", "author": "Herbert" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["outcome"]["kind"], "created");
    let book = &body["state"]["my_books"][0];
    assert_eq!(book["id"], body["outcome"]["id"]);
    assert_eq!(book["year"], "Not specified");
    assert_eq!(book["description"], "No description");
    assert_eq!(body["state"]["draft"]["title"], "");
}

#[tokio::test]
async fn test_toggle_status_twice() {
    let (server, _state) = create_test_server();

    let body: Value = server.post("/api/v1/status/abc/toggle").await.json();
    assert_eq!(body["outcome"]["status"], "read");

    let body: Value = server.post("/api/v1/status/abc/toggle").await.json();
    assert_eq!(body["outcome"]["status"], "want-to-read");
}

// =============================================================================
// HTML page
// =============================================================================

#[tokio::test]
async fn test_index_page() {
    let (server, _state) = create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("My BookList"));
    assert!(html.contains("Search for books..."));
    assert!(html.contains("Add New Book"));
}

#[tokio::test]
async fn test_search_form() {
    let (server, _state) = create_test_server();

    let response = server.post("/search").form(&[("query", "rust")]).await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(html.matches("class=\"book-card\"").count(), 2);
    assert!(html.contains("Rust for Rustaceans"));
    assert!(html.contains("value=\"rust\""));
}

#[tokio::test]
async fn test_blank_search_form_shows_notice() {
    let (server, _state) = create_test_server();

    let html = server.post("/search").form(&[("query", "")]).await.text();

    assert!(html.contains("Please enter a search term!"));
    assert!(html.contains("notice-error"));
}

#[tokio::test]
async fn test_add_and_toggle_forms() {
    let (server, state) = create_test_server();
    server.post("/search").form(&[("query", "dune")]).await;

    let html = server.post("/my-books").form(&[("id", "dune")]).await.text();
    assert!(html.contains("Book added to your personal list!"));

    let html = server.post("/status/dune/toggle").await.text();
    // Same id shows the same status in results and in My Books
    assert_eq!(html.matches("Already Read").count(), 2);

    let html = server.post("/my-books").form(&[("id", "dune")]).await.text();
    assert!(html.contains("Book already in your list!"));
    assert_eq!(state.tracker.view().await.my_books.len(), 1);
}

#[tokio::test]
async fn test_new_book_form_keeps_incomplete_draft() {
    let (server, state) = create_test_server();

    let html = server
        .post("/my-books/new")
        .form(&[("title", "Dune"), ("author", ""), ("year", ""), ("description", "")])
        .await
        .text();

    assert!(html.contains("Please fill in Title and Author!"));
    assert!(html.contains("value=\"Dune\""));
    assert!(state.tracker.view().await.my_books.is_empty());
}

// =============================================================================
// Google Books client against a local stub
// =============================================================================

async fn volumes(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    assert_eq!(params.get("maxResults").map(String::as_str), Some("6"));

    let query = match params.get("q") {
        Some(query) if query != "nothing" => query,
        _ => return Json(json!({ "kind": "books#volumes", "totalItems": 0 })),
    };

    let items: Vec<Value> = (0..8)
        .map(|i| {
            json!({
                "id": format!("{}-{}", query, i),
                "volumeInfo": {
                    "title": format!("{} volume {}", query, i),
                    "authors": ["A. Writer", "B. Writer"],
                    "imageLinks": { "thumbnail": "http://covers.test/1.jpg" }
                }
            })
        })
        .collect();

    Json(json!({ "kind": "books#volumes", "totalItems": items.len(), "items": items }))
}

async fn spawn_stub_catalog() -> String {
    let app = Router::new()
        .route("/books/v1/volumes", get(volumes))
        .route("/garbled/volumes", get(|| async { "<html>not json</html>" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/books/v1", addr)
}

#[tokio::test]
async fn test_google_catalog_normalizes_and_caps() {
    let base_url = spawn_stub_catalog().await;
    let catalog = GoogleBooksCatalog::with_options(base_url, None).unwrap();

    let records = catalog.search("rust lang", MAX_RESULTS).await.unwrap().unwrap();

    assert_eq!(records.len(), MAX_RESULTS);
    assert_eq!(records[0].id, "rust lang-0");
    assert_eq!(records[0].author, "A. Writer, B. Writer");
    assert_eq!(records[0].year, "Unknown Year");
    assert_eq!(records[0].cover_image, "http://covers.test/1.jpg");
}

#[tokio::test]
async fn test_google_catalog_without_items() {
    let base_url = spawn_stub_catalog().await;
    let catalog = GoogleBooksCatalog::with_options(base_url, None).unwrap();

    assert!(catalog.search("nothing", MAX_RESULTS).await.unwrap().is_none());
}

#[tokio::test]
async fn test_google_catalog_http_error() {
    let base_url = spawn_stub_catalog().await;
    let catalog =
        GoogleBooksCatalog::with_options(format!("{}/missing", base_url), None).unwrap();

    let err = catalog.search("rust", MAX_RESULTS).await.unwrap_err();
    assert!(matches!(err, booklist_core::CatalogError::Status(404)));
}

#[tokio::test]
async fn test_google_catalog_malformed_body() {
    let base_url = spawn_stub_catalog().await;
    let garbled = base_url.replace("/books/v1", "/garbled");
    let catalog = GoogleBooksCatalog::with_options(garbled, None).unwrap();

    let err = catalog.search("rust", MAX_RESULTS).await.unwrap_err();
    match err {
        booklist_core::CatalogError::Request(e) => assert!(e.is_decode()),
        other => panic!("expected a decode failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_over_stub_catalog() {
    let base_url = spawn_stub_catalog().await;
    let config = ServerConfig {
        catalog_url: base_url,
        ..ServerConfig::default()
    };
    let state = AppState::new(config).unwrap();
    let server = TestServer::new(create_router(state)).unwrap();

    let body: Value = server
        .post("/api/v1/search")
        .json(&json!({ "query": "dune" }))
        .await
        .json();
    assert_eq!(body["outcome"]["count"], 6);

    let body: Value = server
        .post("/api/v1/search")
        .json(&json!({ "query": "nothing" }))
        .await
        .json();
    assert_eq!(body["outcome"]["kind"], "no_results");
    assert_eq!(body["state"]["results"].as_array().unwrap().len(), 6);
}
