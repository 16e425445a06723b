//! Guestbook service
//!
//! Well-wishes and their like counters.

use tracing::{error, info, instrument};
use uuid::Uuid;

use shower_core::entities::{Message, NewMessage};
use shower_core::error::{Collection, DomainError};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Guestbook service
pub struct GuestbookService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuestbookService<'a> {
    /// Create a new GuestbookService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All messages as the store returns them
    ///
    /// The store orders newest first; callers that display them re-sort.
    #[instrument(skip(self))]
    pub async fn fetch_messages(&self) -> ServiceResult<Vec<Message>> {
        let messages = self
            .ctx
            .message_repo()
            .find_all()
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching messages"))?;

        Ok(messages)
    }

    /// Post a message with zero likes
    #[instrument(skip(self, content))]
    pub async fn create_message(&self, author_name: &str, content: &str) -> ServiceResult<Message> {
        if author_name.trim().is_empty() || content.trim().is_empty() {
            return Err(ServiceError::validation("Name and message are required"));
        }

        let message = self
            .ctx
            .message_repo()
            .create(&NewMessage::new(author_name, content))
            .await
            .inspect_err(|e| error!(error = %e, "Error creating message"))?;

        info!(message_id = %message.id, author_name, "Message created");
        Ok(message)
    }

    /// Add one like
    ///
    /// Reads the counter then writes it back plus one. Not atomic: two likes
    /// racing on the same message can count once.
    #[instrument(skip(self))]
    pub async fn like_message(&self, message_id: Uuid) -> ServiceResult<Message> {
        let current = self
            .ctx
            .message_repo()
            .find_by_id(message_id)
            .await
            .inspect_err(|e| error!(%message_id, error = %e, "Error loading message"))?
            .ok_or_else(|| DomainError::not_found(Collection::Messages, message_id))?;

        let message = self
            .ctx
            .message_repo()
            .update_likes(message_id, current.next_likes())
            .await
            .inspect_err(|e| error!(%message_id, error = %e, "Error liking message"))?;

        info!(%message_id, likes = message.likes, "Message liked");
        Ok(message)
    }
}
