//! PostgreSQL implementation of GuestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use shower_core::entities::{ConfirmationChange, Guest};
use shower_core::error::Collection;
use shower_core::traits::{GuestRepository, RepoResult};

use crate::models::GuestModel;

use super::error::{map_read_error, map_write_error};

/// PostgreSQL implementation of GuestRepository
#[derive(Clone)]
pub struct PgGuestRepository {
    pool: PgPool,
}

impl PgGuestRepository {
    /// Create a new PgGuestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestRepository for PgGuestRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Guest>> {
        let results = sqlx::query_as::<_, GuestModel>(
            r#"
            SELECT id, name, confirmed, confirmed_at, created_at, category
            FROM guests
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error(Collection::Guests))?;

        Ok(results.into_iter().map(Guest::from).collect())
    }

    #[instrument(skip(self))]
    async fn update_confirmation(&self, id: i64, change: ConfirmationChange) -> RepoResult<Guest> {
        // $3 = false keeps the stored timestamp (decline)
        let result = sqlx::query_as::<_, GuestModel>(
            r#"
            UPDATE guests
            SET confirmed = $2,
                confirmed_at = CASE WHEN $3 THEN $4 ELSE confirmed_at END
            WHERE id = $1
            RETURNING id, name, confirmed, confirmed_at, created_at, category
            "#,
        )
        .bind(id)
        .bind(change.confirmed)
        .bind(change.confirmed_at.is_some())
        .bind(change.confirmed_at.flatten())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error(Collection::Guests, id))?;

        Ok(Guest::from(result))
    }
}
