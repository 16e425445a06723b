//! Message entity - a guestbook well-wish that other guests can like

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Short Spanish month names used by the guestbook date stamp
const MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Avatar colours, cycled by the message's position in the list
pub const AVATAR_COLORS: [&str; 3] = ["pink", "purple", "blue"];

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub author_name: String,
    pub content: String,
    /// Rows written before the counter existed hold `null`
    #[serde(default, deserialize_with = "null_as_zero")]
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new message; the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub author_name: String,
    pub content: String,
    pub likes: i64,
}

impl NewMessage {
    /// Create a new message draft with zero likes
    pub fn new(author_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author_name: author_name.into(),
            content: content.into(),
            likes: 0,
        }
    }

    /// Materialise into a stored message
    pub fn into_message(self, id: Uuid, created_at: DateTime<Utc>) -> Message {
        Message {
            id,
            author_name: self.author_name,
            content: self.content,
            likes: self.likes,
            created_at,
        }
    }
}

impl Message {
    /// Like count after one more like
    #[inline]
    pub fn next_likes(&self) -> i64 {
        self.likes.max(0) + 1
    }

    /// Uppercased first letter of the author's name
    pub fn initial(&self) -> String {
        self.author_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Date stamp such as `5 ene 2025`
    pub fn display_date(&self) -> String {
        format_short_date(self.created_at)
    }
}

/// Format a timestamp as `{day} {month} {year}` with Spanish month abbreviations
pub fn format_short_date(at: DateTime<Utc>) -> String {
    let month = MONTHS[at.month0() as usize];
    format!("{} {} {}", at.day(), month, at.year())
}

/// Avatar colour for the message at `index` in the displayed list
pub fn avatar_color(index: usize) -> &'static str {
    AVATAR_COLORS[index % AVATAR_COLORS.len()]
}

/// Sort messages newest first
pub fn sort_newest_first(messages: &mut [Message]) {
    messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
