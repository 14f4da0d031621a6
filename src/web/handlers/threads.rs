//! Thread handlers: /api/threads/:board

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use std::sync::Arc;

use super::{board_location, found, AppState};
use crate::board::{BoardService, ThreadView};
use crate::web::dto::{
    CreateThreadRequest, DeleteThreadRequest, ReportThreadRequest, ValidatedPayload,
};
use crate::web::error::ApiError;

/// POST /api/threads/:board - Create a thread and redirect to the board page.
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedPayload(req): ValidatedPayload<CreateThreadRequest>,
) -> Result<Response, ApiError> {
    let board = req
        .board
        .filter(|b| !b.trim().is_empty())
        .unwrap_or(board);

    BoardService::new(&state.db)
        .create_thread(&board, &req.text, &req.delete_password)
        .await?;

    Ok(found(board_location(&board)))
}

/// GET /api/threads/:board - The ten most recently bumped threads.
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
) -> Result<Json<Vec<ThreadView>>, ApiError> {
    let threads = BoardService::new(&state.db)
        .list_recent_threads(&board)
        .await?;
    Ok(Json(threads))
}

/// PUT /api/threads/:board - Report a thread.
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedPayload(req): ValidatedPayload<ReportThreadRequest>,
) -> Result<&'static str, ApiError> {
    BoardService::new(&state.db)
        .report_thread(&board, &req.thread_id)
        .await?;
    Ok("reported")
}

/// DELETE /api/threads/:board - Delete a thread given its password.
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedPayload(req): ValidatedPayload<DeleteThreadRequest>,
) -> Result<&'static str, ApiError> {
    BoardService::new(&state.db)
        .delete_thread(&board, &req.thread_id, &req.delete_password)
        .await?;
    Ok("success")
}
