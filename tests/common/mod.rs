//! Shared helpers for web API integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use corkboard::web::handlers::AppState;
use corkboard::web::router::create_router;
use corkboard::Database;
use serde_json::{json, Value};

/// Create a test server backed by an in-memory database.
pub async fn create_test_server() -> (TestServer, Arc<Database>) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let shared_db = Arc::new(db);

    let app_state = Arc::new(AppState::new(shared_db.clone()));
    let router = create_router(app_state, &[]);

    let server = TestServer::new(router).expect("Failed to create test server");

    (server, shared_db)
}

/// Sleep long enough for the next timestamp to be strictly later.
pub async fn tick() {
    tokio::time::sleep(Duration::from_millis(5)).await;
}

/// Fetch the board listing as JSON.
pub async fn list_threads(server: &TestServer, board: &str) -> Vec<Value> {
    let response = server.get(&format!("/api/threads/{board}")).await;
    response.assert_status_ok();
    response.json::<Vec<Value>>()
}

/// Create a thread through the API and return its id.
///
/// The create endpoint only redirects, so the id is looked up in the
/// listing by its (unique) text.
pub async fn create_thread(server: &TestServer, board: &str, text: &str, password: &str) -> String {
    let response = server
        .post(&format!("/api/threads/{board}"))
        .json(&json!({ "text": text, "delete_password": password }))
        .await;
    assert_eq!(response.status_code(), 302);

    find_thread(server, board, text)
        .await
        .and_then(|t| t["_id"].as_str().map(str::to_string))
        .expect("created thread missing from listing")
}

/// Find a listed thread by its text.
pub async fn find_thread(server: &TestServer, board: &str, text: &str) -> Option<Value> {
    list_threads(server, board)
        .await
        .into_iter()
        .find(|t| t["text"] == text)
}

/// Fetch a single thread with all replies.
pub async fn get_thread(server: &TestServer, board: &str, thread_id: &str) -> Value {
    let response = server
        .get(&format!("/api/replies/{board}"))
        .add_query_param("thread_id", thread_id)
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}

/// Reply to a thread through the API and return the new reply id.
pub async fn create_reply(
    server: &TestServer,
    board: &str,
    thread_id: &str,
    text: &str,
    password: &str,
) -> String {
    let response = server
        .post(&format!("/api/replies/{board}"))
        .json(&json!({
            "thread_id": thread_id,
            "text": text,
            "delete_password": password
        }))
        .await;
    assert_eq!(response.status_code(), 302);

    let thread = get_thread(server, board, thread_id).await;
    thread["replies"]
        .as_array()
        .and_then(|replies| replies.iter().find(|r| r["text"] == text))
        .and_then(|r| r["_id"].as_str().map(str::to_string))
        .expect("created reply missing from thread")
}
