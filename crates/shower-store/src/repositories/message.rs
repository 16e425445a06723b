//! REST implementation of MessageRepository

use async_trait::async_trait;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use shower_core::entities::{Message, NewMessage};
use shower_core::error::Collection;
use shower_core::traits::{MessageRepository, RepoResult};

use crate::client::{Order, StoreClient};

use super::error::{map_fetch_error, map_write_error, single_row};

/// Hosted store implementation of MessageRepository
#[derive(Clone)]
pub struct RestMessageRepository {
    client: StoreClient,
}

impl RestMessageRepository {
    /// Create a new RestMessageRepository
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageRepository for RestMessageRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Message>> {
        self.client
            .table(Collection::Messages.table())
            .order("created_at", Order::Desc)
            .select()
            .await
            .map_err(map_fetch_error(Collection::Messages))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>> {
        let rows: Vec<Message> = self
            .client
            .table(Collection::Messages.table())
            .eq("id", id)
            .select()
            .await
            .map_err(map_fetch_error(Collection::Messages))?;

        Ok(rows.into_iter().next())
    }

    #[instrument(skip(self, message), fields(author = %message.author_name))]
    async fn create(&self, message: &NewMessage) -> RepoResult<Message> {
        let rows: Vec<Message> = self
            .client
            .table(Collection::Messages.table())
            .insert(message)
            .await
            .map_err(map_write_error(Collection::Messages))?;

        rows.into_iter().next().ok_or_else(|| {
            shower_core::DomainError::write(Collection::Messages, "insert returned no row")
        })
    }

    #[instrument(skip(self))]
    async fn update_likes(&self, id: Uuid, likes: i64) -> RepoResult<Message> {
        let rows: Vec<Message> = self
            .client
            .table(Collection::Messages.table())
            .eq("id", id)
            .update(&json!({ "likes": likes }))
            .await
            .map_err(map_write_error(Collection::Messages))?;

        single_row(rows, Collection::Messages, id)
    }
}
