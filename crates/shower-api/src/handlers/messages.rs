//! Guestbook handlers
//!
//! Endpoints for guestbook messages.

use axum::{extract::State, Json};
use shower_core::sort_newest_first;
use shower_service::dto::{CreateMessageRequest, MessageListResponse, MessageResponse};
use shower_service::GuestbookService;

use crate::extractors::{MessageIdPath, ParsedPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List messages newest first
///
/// GET /messages
pub async fn list_messages(State(state): State<AppState>) -> ApiResult<Json<MessageListResponse>> {
    let service = GuestbookService::new(state.service_context());
    let mut messages = service.fetch_messages().await?;
    sort_newest_first(&mut messages);
    Ok(Json(MessageListResponse::from(messages.as_slice())))
}

/// Post a message
///
/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = GuestbookService::new(state.service_context());
    let message = service
        .create_message(request.author_name.trim(), request.content.trim())
        .await?;
    Ok(Created(Json(MessageResponse::from(message))))
}

/// Like a message
///
/// POST /messages/{message_id}/like
pub async fn like_message(
    State(state): State<AppState>,
    ParsedPath(path): ParsedPath<MessageIdPath>,
) -> ApiResult<Json<MessageResponse>> {
    let service = GuestbookService::new(state.service_context());
    let message = service.like_message(path.message_id).await?;
    Ok(Json(MessageResponse::from(message)))
}
