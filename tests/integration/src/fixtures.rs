//! Test fixtures
//!
//! Seed data and the response shapes the tests read back.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use shower_core::entities::{Gift, Guest, NewMessage};
use shower_store::MemoryStore;
use uuid::Uuid;

/// Ids of the seeded records
pub struct Seeded {
    pub cuna: Uuid,
    pub biberones: Uuid,
    pub first_message: Uuid,
}

/// Store with three guests, two gifts and one message
pub fn seeded_store() -> (MemoryStore, Seeded) {
    let store = MemoryStore::new();
    store.insert_guests(vec![
        Guest::new(1, "Ana García"),
        Guest::new(2, "Juliana Torres"),
        Guest::new(3, "Pedro Ruiz"),
    ]);

    let cuna = Gift::new("Cuna", "muebles", "$$$");
    let mut biberones = Gift::new("Biberones", "alimentación", "$");
    biberones.reserved_by = Some("Abuela".to_string());
    let ids = (cuna.id, biberones.id);
    store.insert_gifts(vec![cuna, biberones]);

    let first = NewMessage::new("Tía Rosa", "¡Felicidades!")
        .into_message(Uuid::new_v4(), Utc::now() - Duration::days(1));
    let first_message = first.id;
    store.insert_messages(vec![first]);

    (
        store,
        Seeded {
            cuna: ids.0,
            biberones: ids.1,
            first_message,
        },
    )
}

/// RSVP body
#[derive(Debug, Serialize)]
pub struct ConfirmationBody {
    pub confirmed: Option<bool>,
}

/// RSVP body with the field name mistyped
#[derive(Debug, Serialize)]
pub struct MistypedConfirmationBody {
    pub confirm: bool,
}

/// Body with no fields at all
#[derive(Debug, Serialize)]
pub struct EmptyBody {}

/// Reservation body
#[derive(Debug, Serialize)]
pub struct ReserveBody {
    pub name: String,
}

impl ReserveBody {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Guestbook post body
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub author_name: String,
    pub content: String,
}

impl MessageBody {
    pub fn new(author_name: &str, content: &str) -> Self {
        Self {
            author_name: author_name.to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GuestJson {
    pub id: i64,
    pub name: Option<String>,
    pub confirmed: Option<bool>,
    pub confirmed_at: Option<String>,
    pub initial: String,
}

#[derive(Debug, Deserialize)]
pub struct GuestListJson {
    pub guests: Vec<GuestJson>,
    pub total: usize,
    pub confirmed_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct GiftJson {
    pub id: String,
    pub name: String,
    pub category: String,
    pub reservations: Vec<String>,
    pub reserved_by: Option<String>,
    pub status: Option<String>,
    pub display_reservations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GiftListJson {
    pub gifts: Vec<GiftJson>,
    pub categories: Vec<String>,
    pub active_category: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageJson {
    pub id: String,
    pub author_name: String,
    pub content: String,
    pub likes: i64,
    pub avatar_color: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageListJson {
    pub messages: Vec<MessageJson>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct CountdownJson {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub finished: bool,
}

#[derive(Debug, Deserialize)]
pub struct ErrorJson {
    pub error: ErrorDetailJson,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetailJson {
    pub code: String,
    pub message: String,
}
