//! Guest database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for guests table
#[derive(Debug, Clone, FromRow)]
pub struct GuestModel {
    pub id: i64,
    pub name: Option<String>,
    pub confirmed: Option<bool>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub category: Option<String>,
}
