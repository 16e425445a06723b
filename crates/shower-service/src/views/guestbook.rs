//! Guestbook state

use tracing::{error, instrument};
use uuid::Uuid;

use shower_core::entities::{sort_newest_first, Message};

use crate::dto::MessageListResponse;
use crate::services::{GuestbookService, ServiceContext};

use super::Notice;

/// Messages newest first with a posting form
pub struct GuestbookView {
    ctx: ServiceContext,
    messages: Vec<Message>,
    draft_author: String,
    draft_content: String,
    loading: bool,
    submitting: bool,
}

impl GuestbookView {
    pub fn new(ctx: ServiceContext) -> Self {
        Self {
            ctx,
            messages: Vec::new(),
            draft_author: String::new(),
            draft_content: String::new(),
            loading: true,
            submitting: false,
        }
    }

    /// Fetch and sort newest first; a failed read leaves the list empty
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        self.loading = true;
        let mut messages = GuestbookService::new(&self.ctx)
            .fetch_messages()
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, "Error loading messages");
                Vec::new()
            });
        sort_newest_first(&mut messages);
        self.messages = messages;
        self.loading = false;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Messages decorated for display
    pub fn cards(&self) -> MessageListResponse {
        MessageListResponse::from(self.messages.as_slice())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn draft(&self) -> (&str, &str) {
        (&self.draft_author, &self.draft_content)
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.draft_author = author.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft_content = content.into();
    }

    /// Both fields hold something besides whitespace
    pub fn can_submit(&self) -> bool {
        !self.draft_author.trim().is_empty() && !self.draft_content.trim().is_empty()
    }

    /// Post the draft and put the stored message at the top
    ///
    /// Returns `Ok(false)` when a field is blank. On failure the draft is kept.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<bool, Notice> {
        if !self.can_submit() {
            return Ok(false);
        }

        self.submitting = true;
        let result = GuestbookService::new(&self.ctx)
            .create_message(self.draft_author.trim(), self.draft_content.trim())
            .await;
        self.submitting = false;

        let created = result.map_err(|_| Notice::MessageFailed)?;
        self.messages.insert(0, created);
        self.draft_author.clear();
        self.draft_content.clear();
        Ok(true)
    }

    /// Like a message and show the stored count
    ///
    /// Failures are only logged; returns whether the like went through.
    #[instrument(skip(self))]
    pub async fn like(&mut self, message_id: Uuid) -> bool {
        match GuestbookService::new(&self.ctx).like_message(message_id).await {
            Ok(updated) => {
                if let Some(message) = self.messages.iter_mut().find(|m| m.id == updated.id) {
                    *message = updated;
                }
                true
            }
            Err(e) => {
                error!(%message_id, error = %e, "Error liking message");
                false
            }
        }
    }
}
