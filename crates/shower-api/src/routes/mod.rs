//! Route definitions
//!
//! All API routes organized by page section and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{countdown, gifts, guests, health, messages};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(guest_routes())
        .merge(gift_routes())
        .merge(message_routes())
        .route("/countdown", get(countdown::get_countdown))
}

/// RSVP routes
fn guest_routes() -> Router<AppState> {
    Router::new()
        .route("/guests", get(guests::list_guests))
        .route("/guests/:guest_id/confirmation", put(guests::update_confirmation))
}

/// Gift registry routes
fn gift_routes() -> Router<AppState> {
    Router::new()
        .route("/gifts", get(gifts::list_gifts))
        .route("/gifts/:gift_id/reservations", post(gifts::reserve_gift))
        .route(
            "/gifts/:gift_id/reservations/:name",
            delete(gifts::remove_reservation),
        )
}

/// Guestbook routes
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", get(messages::list_messages).post(messages::create_message))
        .route("/messages/:message_id/like", post(messages::like_message))
}
