//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use shower_core::entities::{Message, NewMessage};
use shower_core::error::{Collection, DomainError};
use shower_core::traits::{MessageRepository, RepoResult};

use crate::models::MessageModel;

use super::error::{map_read_error, map_write_error};

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Message>> {
        let results = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, author_name, content, likes, created_at
            FROM messages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error(Collection::Messages))?;

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>> {
        let result = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, author_name, content, likes, created_at
            FROM messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error(Collection::Messages))?;

        Ok(result.map(Message::from))
    }

    #[instrument(skip(self, message), fields(author = %message.author_name))]
    async fn create(&self, message: &NewMessage) -> RepoResult<Message> {
        let result = sqlx::query_as::<_, MessageModel>(
            r#"
            INSERT INTO messages (author_name, content, likes)
            VALUES ($1, $2, $3)
            RETURNING id, author_name, content, likes, created_at
            "#,
        )
        .bind(&message.author_name)
        .bind(&message.content)
        .bind(message.likes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::write(Collection::Messages, e))?;

        Ok(Message::from(result))
    }

    #[instrument(skip(self))]
    async fn update_likes(&self, id: Uuid, likes: i64) -> RepoResult<Message> {
        let result = sqlx::query_as::<_, MessageModel>(
            r#"
            UPDATE messages
            SET likes = $2
            WHERE id = $1
            RETURNING id, author_name, content, likes, created_at
            "#,
        )
        .bind(id)
        .bind(likes)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error(Collection::Messages, id))?;

        Ok(Message::from(result))
    }
}
