//! Reply handlers: /api/replies/:board

use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use std::sync::Arc;

use super::{found, thread_location, AppState};
use crate::board::{BoardService, ThreadView};
use crate::web::dto::{
    CreateReplyRequest, DeleteReplyRequest, ReportReplyRequest, ThreadQuery, ValidatedPayload,
};
use crate::web::error::ApiError;
use crate::CorkboardError;

/// POST /api/replies/:board - Reply to a thread and redirect to the thread page.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedPayload(req): ValidatedPayload<CreateReplyRequest>,
) -> Result<Response, ApiError> {
    BoardService::new(&state.db)
        .create_reply(&board, &req.thread_id, &req.text, &req.delete_password)
        .await?;

    Ok(found(thread_location(&board, &req.thread_id)))
}

/// GET /api/replies/:board?thread_id= - A thread with all its replies.
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Query(query): Query<ThreadQuery>,
) -> Result<Json<ThreadView>, ApiError> {
    if query.thread_id.is_empty() {
        return Err(CorkboardError::thread_not_found().into());
    }

    let thread = BoardService::new(&state.db)
        .get_thread(&board, &query.thread_id)
        .await?;
    Ok(Json(thread))
}

/// PUT /api/replies/:board - Report a reply.
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedPayload(req): ValidatedPayload<ReportReplyRequest>,
) -> Result<&'static str, ApiError> {
    BoardService::new(&state.db)
        .report_reply(&board, &req.thread_id, &req.reply_id)
        .await?;
    Ok("reported")
}

/// DELETE /api/replies/:board - Soft-delete a reply given its password.
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedPayload(req): ValidatedPayload<DeleteReplyRequest>,
) -> Result<&'static str, ApiError> {
    BoardService::new(&state.db)
        .delete_reply(&board, &req.thread_id, &req.reply_id, &req.delete_password)
        .await?;
    Ok("success")
}
