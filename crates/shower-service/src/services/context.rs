//! Service context - dependency container for services
//!
//! Holds the repositories and event settings needed by services and views.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use shower_core::traits::{GiftRepository, GuestRepository, HealthCheck, MessageRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every clone shares the same repositories.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    guest_repo: Arc<dyn GuestRepository>,
    gift_repo: Arc<dyn GiftRepository>,
    message_repo: Arc<dyn MessageRepository>,

    // Store reachability
    health: Arc<dyn HealthCheck>,

    // Countdown target
    event_starts_at: DateTime<Utc>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        guest_repo: Arc<dyn GuestRepository>,
        gift_repo: Arc<dyn GiftRepository>,
        message_repo: Arc<dyn MessageRepository>,
        health: Arc<dyn HealthCheck>,
        event_starts_at: DateTime<Utc>,
    ) -> Self {
        Self {
            guest_repo,
            gift_repo,
            message_repo,
            health,
            event_starts_at,
        }
    }

    /// Start a builder
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the guest repository
    pub fn guest_repo(&self) -> &dyn GuestRepository {
        self.guest_repo.as_ref()
    }

    /// Get the gift repository
    pub fn gift_repo(&self) -> &dyn GiftRepository {
        self.gift_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the store health probe
    pub fn health(&self) -> &dyn HealthCheck {
        self.health.as_ref()
    }

    // === Event ===

    /// Instant the countdown runs to
    pub fn event_starts_at(&self) -> DateTime<Utc> {
        self.event_starts_at
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("event_starts_at", &self.event_starts_at)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    guest_repo: Option<Arc<dyn GuestRepository>>,
    gift_repo: Option<Arc<dyn GiftRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    health: Option<Arc<dyn HealthCheck>>,
    event_starts_at: Option<DateTime<Utc>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn guest_repo(mut self, repo: Arc<dyn GuestRepository>) -> Self {
        self.guest_repo = Some(repo);
        self
    }

    pub fn gift_repo(mut self, repo: Arc<dyn GiftRepository>) -> Self {
        self.gift_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn health(mut self, health: Arc<dyn HealthCheck>) -> Self {
        self.health = Some(health);
        self
    }

    /// Use one backend for every collection and the health probe
    pub fn store<S>(self, store: S) -> Self
    where
        S: GuestRepository + GiftRepository + MessageRepository + HealthCheck + 'static,
    {
        let store = Arc::new(store);
        self.guest_repo(store.clone())
            .gift_repo(store.clone())
            .message_repo(store.clone())
            .health(store)
    }

    pub fn event_starts_at(mut self, at: DateTime<Utc>) -> Self {
        self.event_starts_at = Some(at);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.guest_repo
                .ok_or_else(|| ServiceError::validation("guest_repo is required"))?,
            self.gift_repo
                .ok_or_else(|| ServiceError::validation("gift_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.health
                .ok_or_else(|| ServiceError::validation("health is required"))?,
            self.event_starts_at
                .ok_or_else(|| ServiceError::validation("event_starts_at is required"))?,
        ))
    }
}
