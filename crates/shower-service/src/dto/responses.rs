//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Display-ready
//! fields (initials, icons, formatted dates) are computed on the way out.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shower_core::TimeLeft;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Guest Responses
// ============================================================================

/// Guest with its display initial
#[derive(Debug, Clone, Serialize)]
pub struct GuestResponse {
    pub id: i64,
    pub name: Option<String>,
    pub confirmed: Option<bool>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub category: Option<String>,
    pub initial: String,
}

/// Filtered guest list
///
/// `total` and `confirmed_count` cover the whole list, not just the matches.
#[derive(Debug, Clone, Serialize)]
pub struct GuestListResponse {
    pub guests: Vec<GuestResponse>,
    pub total: usize,
    pub confirmed_count: usize,
    pub query: String,
}

// ============================================================================
// Gift Responses
// ============================================================================

/// Gift with the fields the registry card renders
#[derive(Debug, Clone, Serialize)]
pub struct GiftResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    pub price_range: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    pub reservations: Vec<String>,
    pub reserved_by: Option<String>,
    pub status: Option<String>,
    /// Reservations to show, falling back to `reserved_by` on old records
    pub display_reservations: Vec<String>,
    pub reservation_summary: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Registry filtered by category
#[derive(Debug, Clone, Serialize)]
pub struct GiftListResponse {
    pub gifts: Vec<GiftResponse>,
    pub categories: Vec<String>,
    pub active_category: String,
}

// ============================================================================
// Guestbook Responses
// ============================================================================

/// Guestbook message with its card decorations
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub author_name: String,
    pub content: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub initial: String,
    pub display_date: String,
    pub avatar_color: String,
}

/// Messages newest first
#[derive(Debug, Clone, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<MessageResponse>,
    pub total: usize,
}

// ============================================================================
// Countdown Responses
// ============================================================================

/// Unit value with its label, e.g. `{"label":"Días","value":"03"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountdownUnit {
    pub label: String,
    pub value: String,
}

/// Time left until the event
#[derive(Debug, Clone, Serialize)]
pub struct CountdownResponse {
    pub target: DateTime<Utc>,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub finished: bool,
    pub units: Vec<CountdownUnit>,
}

impl CountdownResponse {
    pub fn new(target: DateTime<Utc>, left: TimeLeft) -> Self {
        Self {
            target,
            days: left.days,
            hours: left.hours,
            minutes: left.minutes,
            seconds: left.seconds,
            finished: left.is_zero(),
            units: left
                .units()
                .into_iter()
                .map(|(label, value)| CountdownUnit {
                    label: label.to_string(),
                    value,
                })
                .collect(),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
