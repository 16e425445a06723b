//! Countdown handler

use axum::{extract::State, Json};
use chrono::Utc;
use shower_service::dto::CountdownResponse;
use shower_service::CountdownService;

use crate::state::AppState;

/// Time left until the event
///
/// GET /countdown
pub async fn get_countdown(State(state): State<AppState>) -> Json<CountdownResponse> {
    let service = CountdownService::new(state.service_context());
    Json(service.time_left(Utc::now()))
}
