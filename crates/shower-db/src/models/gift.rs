//! Gift database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for gifts table
#[derive(Debug, Clone, FromRow)]
pub struct GiftModel {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price_range: String,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub product_url: Option<String>,
    pub reservations: Option<Vec<String>>,
    pub reserved_by: Option<String>,
    pub status: Option<String>,
    pub group_members: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
}
