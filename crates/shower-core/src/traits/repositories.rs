//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the storage backends
//! (hosted REST store, direct PostgreSQL, in-memory) provide it.
//!
//! Every method is a single round trip to the store of record. None of them
//! is transactional: read-modify-write sequences built on top (reservations,
//! likes) are last-writer-wins, and two concurrent writers on the same record
//! can lose one of the updates.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{ConfirmationChange, Gift, Guest, Message, NewMessage, ReservationUpdate};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Guest Repository
// ============================================================================

#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// List every guest ordered by name ascending
    async fn find_all(&self) -> RepoResult<Vec<Guest>>;

    /// Write a confirmation change and return the stored row
    ///
    /// Fails with `NotFound` when no guest has this id.
    async fn update_confirmation(&self, id: i64, change: ConfirmationChange)
        -> RepoResult<Guest>;
}

// ============================================================================
// Gift Repository
// ============================================================================

#[async_trait]
pub trait GiftRepository: Send + Sync {
    /// List every gift ordered by creation time descending
    async fn find_all(&self) -> RepoResult<Vec<Gift>>;

    /// Find gift by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Gift>>;

    /// Overwrite the reservation list and its legacy projection
    ///
    /// Last-writer-wins: the list is replaced wholesale, so a concurrent
    /// reservation on the same gift between read and write is lost.
    async fn update_reservations(&self, id: Uuid, update: &ReservationUpdate) -> RepoResult<Gift>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// List every message, newest first where the backend supports ordering
    async fn find_all(&self) -> RepoResult<Vec<Message>>;

    /// Find message by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>>;

    /// Insert a message and return it with its assigned id and timestamp
    async fn create(&self, message: &NewMessage) -> RepoResult<Message>;

    /// Overwrite the like counter
    ///
    /// Last-writer-wins: callers compute `likes` from a previous read.
    async fn update_likes(&self, id: Uuid, likes: i64) -> RepoResult<Message>;
}

// ============================================================================
// Health
// ============================================================================

#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Check that the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
