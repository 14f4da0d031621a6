//! Request DTOs for the board API.
//!
//! Bodies arrive either as JSON or as urlencoded HTML form posts.

use serde::Deserialize;
use validator::Validate;

/// POST /api/threads/:board
#[derive(Debug, Deserialize, Validate)]
pub struct CreateThreadRequest {
    /// Thread body.
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
    /// Secret needed to delete the thread later.
    #[validate(length(min = 1, message = "delete_password is required"))]
    pub delete_password: String,
    /// Board named in the form, overriding the path segment.
    #[serde(default)]
    pub board: Option<String>,
}

/// PUT /api/threads/:board
#[derive(Debug, Deserialize, Validate)]
pub struct ReportThreadRequest {
    #[validate(length(min = 1, message = "thread_id is required"))]
    pub thread_id: String,
}

/// DELETE /api/threads/:board
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteThreadRequest {
    #[validate(length(min = 1, message = "thread_id is required"))]
    pub thread_id: String,
    #[serde(default)]
    pub delete_password: String,
}

/// POST /api/replies/:board
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReplyRequest {
    #[validate(length(min = 1, message = "thread_id is required"))]
    pub thread_id: String,
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
    #[validate(length(min = 1, message = "delete_password is required"))]
    pub delete_password: String,
}

/// GET /api/replies/:board?thread_id=
#[derive(Debug, Deserialize)]
pub struct ThreadQuery {
    #[serde(default)]
    pub thread_id: String,
}

/// PUT /api/replies/:board
#[derive(Debug, Deserialize, Validate)]
pub struct ReportReplyRequest {
    #[validate(length(min = 1, message = "thread_id is required"))]
    pub thread_id: String,
    #[validate(length(min = 1, message = "reply_id is required"))]
    pub reply_id: String,
}

/// DELETE /api/replies/:board
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteReplyRequest {
    #[validate(length(min = 1, message = "thread_id is required"))]
    pub thread_id: String,
    #[validate(length(min = 1, message = "reply_id is required"))]
    pub reply_id: String,
    #[serde(default)]
    pub delete_password: String,
}
