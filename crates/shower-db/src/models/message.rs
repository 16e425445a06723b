//! Message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: Uuid,
    pub author_name: String,
    pub content: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}
