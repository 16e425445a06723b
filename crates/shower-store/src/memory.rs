//! Process-local store
//!
//! Backs the `memory` backend and every test that needs a store without a
//! network. Ordering mirrors what the hosted store returns for the same
//! queries.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::RwLock;
use tracing::instrument;
use uuid::Uuid;

use shower_core::entities::{
    ConfirmationChange, Gift, Guest, Message, NewMessage, ReservationUpdate,
};
use shower_core::error::{Collection, DomainError};
use shower_core::traits::{
    GiftRepository, GuestRepository, HealthCheck, MessageRepository, RepoResult,
};

#[derive(Default)]
struct Tables {
    guests: RwLock<Vec<Guest>>,
    gifts: RwLock<Vec<Gift>>,
    messages: RwLock<Vec<Message>>,
    unavailable: AtomicBool,
}

/// In-memory store implementing every repository trait
///
/// Cloning shares the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Tables>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// A small guest list, registry and guestbook for local runs
    pub fn sample() -> Self {
        let store = Self::new();
        let now = Utc::now();

        let mut guests = vec![
            Guest::new(1, "Ana García"),
            Guest::new(2, "Beatriz López"),
            Guest::new(3, "Carlos Pérez"),
            Guest::new(4, "Daniela Ruiz"),
        ];
        guests[0].category = Some("familia".to_string());
        guests[1].category = Some("amigos".to_string());
        store.insert_guests(guests);

        let mut gifts = vec![
            Gift::new("Cuna de madera", "muebles", "$$$"),
            Gift::new("Set de biberones", "alimentación", "$"),
            Gift::new("Pañalera", "accesorios", "$$"),
        ];
        for (i, gift) in gifts.iter_mut().enumerate() {
            gift.created_at = Some(now - Duration::days(i as i64));
        }
        gifts[0].icon = Some("🛏️".to_string());
        store.insert_gifts(gifts);

        store.insert_messages(vec![NewMessage::new(
            "Abuela Rosa",
            "¡Muchas felicidades! Ya queremos conocer al bebé.",
        )
        .into_message(Uuid::new_v4(), now - Duration::hours(2))]);

        store
    }

    /// Add guests as if seeded externally
    pub fn insert_guests(&self, guests: impl IntoIterator<Item = Guest>) {
        self.tables.guests.write().extend(guests);
    }

    /// Add gifts as if seeded externally
    pub fn insert_gifts(&self, gifts: impl IntoIterator<Item = Gift>) {
        self.tables.gifts.write().extend(gifts);
    }

    /// Add already-materialised messages
    pub fn insert_messages(&self, messages: impl IntoIterator<Item = Message>) {
        self.tables.messages.write().extend(messages);
    }

    /// Make every subsequent call fail as if the store were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.tables
            .unavailable
            .store(unavailable, AtomicOrdering::SeqCst);
    }

    fn check_read(&self, collection: Collection) -> RepoResult<()> {
        if self.tables.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(DomainError::fetch(collection, "store unavailable"));
        }
        Ok(())
    }

    fn check_write(&self, collection: Collection) -> RepoResult<()> {
        if self.tables.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(DomainError::write(collection, "store unavailable"));
        }
        Ok(())
    }
}

/// `ORDER BY name ASC`: nulls sort last
fn by_name(a: &Guest, b: &Guest) -> Ordering {
    match (&a.name, &b.name) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// `ORDER BY created_at DESC`: nulls sort first
fn by_created_desc(a: &Gift, b: &Gift) -> Ordering {
    match (a.created_at, b.created_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[async_trait]
impl GuestRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Guest>> {
        self.check_read(Collection::Guests)?;
        let mut guests = self.tables.guests.read().clone();
        guests.sort_by(by_name);
        Ok(guests)
    }

    #[instrument(skip(self))]
    async fn update_confirmation(&self, id: i64, change: ConfirmationChange) -> RepoResult<Guest> {
        self.check_write(Collection::Guests)?;
        let mut guests = self.tables.guests.write();
        let guest = guests
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| DomainError::not_found(Collection::Guests, id))?;
        guest.apply(change);
        Ok(guest.clone())
    }
}

#[async_trait]
impl GiftRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Gift>> {
        self.check_read(Collection::Gifts)?;
        let mut gifts = self.tables.gifts.read().clone();
        gifts.sort_by(by_created_desc);
        Ok(gifts)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Gift>> {
        self.check_read(Collection::Gifts)?;
        Ok(self.tables.gifts.read().iter().find(|g| g.id == id).cloned())
    }

    #[instrument(skip(self, update))]
    async fn update_reservations(&self, id: Uuid, update: &ReservationUpdate) -> RepoResult<Gift> {
        self.check_write(Collection::Gifts)?;
        let mut gifts = self.tables.gifts.write();
        let gift = gifts
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| DomainError::not_found(Collection::Gifts, id))?;
        gift.apply(update.clone());
        Ok(gift.clone())
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Message>> {
        self.check_read(Collection::Messages)?;
        let mut messages = self.tables.messages.read().clone();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>> {
        self.check_read(Collection::Messages)?;
        Ok(self
            .tables
            .messages
            .read()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    #[instrument(skip(self, message))]
    async fn create(&self, message: &NewMessage) -> RepoResult<Message> {
        self.check_write(Collection::Messages)?;
        let created = message.clone().into_message(Uuid::new_v4(), Utc::now());
        self.tables.messages.write().push(created.clone());
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn update_likes(&self, id: Uuid, likes: i64) -> RepoResult<Message> {
        self.check_write(Collection::Messages)?;
        let mut messages = self.tables.messages.write();
        let message = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| DomainError::not_found(Collection::Messages, id))?;
        message.likes = likes;
        Ok(message.clone())
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        self.check_read(Collection::Guests)
    }
}
