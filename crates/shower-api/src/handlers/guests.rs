//! Guest handlers
//!
//! Endpoints for the RSVP list.

use axum::{
    extract::{Query, State},
    Json,
};
use shower_service::dto::{GuestListResponse, GuestQuery, GuestResponse, UpdateConfirmationRequest};
use shower_service::GuestService;

use crate::extractors::{GuestIdPath, ParsedPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List guests, optionally filtered by name
///
/// GET /guests?q=
pub async fn list_guests(
    State(state): State<AppState>,
    Query(query): Query<GuestQuery>,
) -> ApiResult<Json<GuestListResponse>> {
    let service = GuestService::new(state.service_context());
    let response = service.list(query.q.as_deref()).await?;
    Ok(Json(response))
}

/// Set a guest's RSVP answer
///
/// PUT /guests/{guest_id}/confirmation
pub async fn update_confirmation(
    State(state): State<AppState>,
    ParsedPath(path): ParsedPath<GuestIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateConfirmationRequest>,
) -> ApiResult<Json<GuestResponse>> {
    let service = GuestService::new(state.service_context());
    let guest = service
        .update_guest_confirmation(path.guest_id, request.answer())
        .await?;
    Ok(Json(GuestResponse::from(guest)))
}
