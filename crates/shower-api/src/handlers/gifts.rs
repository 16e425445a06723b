//! Gift handlers
//!
//! Endpoints for the gift registry.

use axum::{
    extract::{Query, State},
    Json,
};
use shower_service::dto::{GiftListResponse, GiftQuery, GiftResponse, ReserveGiftRequest};
use shower_service::GiftService;

use crate::extractors::{GiftIdPath, GiftReservationPath, ParsedPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List gifts with the category set
///
/// GET /gifts?category=
pub async fn list_gifts(
    State(state): State<AppState>,
    Query(query): Query<GiftQuery>,
) -> ApiResult<Json<GiftListResponse>> {
    let service = GiftService::new(state.service_context());
    let response = service.list(query.category.as_deref()).await?;
    Ok(Json(response))
}

/// Add a reservation
///
/// POST /gifts/{gift_id}/reservations
pub async fn reserve_gift(
    State(state): State<AppState>,
    ParsedPath(path): ParsedPath<GiftIdPath>,
    ValidatedJson(request): ValidatedJson<ReserveGiftRequest>,
) -> ApiResult<Json<GiftResponse>> {
    let service = GiftService::new(state.service_context());
    let gift = service
        .reserve_gift(path.gift_id, request.name.trim())
        .await?;
    Ok(Json(GiftResponse::from(gift)))
}

/// Remove every reservation made under a name
///
/// DELETE /gifts/{gift_id}/reservations/{name}
pub async fn remove_reservation(
    State(state): State<AppState>,
    ParsedPath(path): ParsedPath<GiftReservationPath>,
) -> ApiResult<Json<GiftResponse>> {
    let service = GiftService::new(state.service_context());
    let gift = service
        .remove_reservation(path.gift_id, path.name.trim())
        .await?;
    Ok(Json(GiftResponse::from(gift)))
}
