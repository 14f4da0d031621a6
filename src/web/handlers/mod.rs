//! API handlers for the board API.

pub mod replies;
pub mod threads;

pub use replies::*;
pub use threads::*;

use axum::http::{header::LOCATION, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::Database;

/// Shared database handle; the pool inside is safe to use concurrently.
pub type SharedDatabase = Arc<Database>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database opened at startup and closed at shutdown.
    pub db: SharedDatabase,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: SharedDatabase) -> Self {
        Self { db }
    }
}

/// 302 Found pointing at a board page.
pub(crate) fn found(location: String) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}

/// Path of the board view page.
pub(crate) fn board_location(board: &str) -> String {
    format!("/b/{}/", urlencoding::encode(board))
}

/// Path of the thread view page.
pub(crate) fn thread_location(board: &str, thread_id: &str) -> String {
    format!(
        "/b/{}/{}/",
        urlencoding::encode(board),
        urlencoding::encode(thread_id)
    )
}
