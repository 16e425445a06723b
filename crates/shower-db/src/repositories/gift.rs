//! PostgreSQL implementation of GiftRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use shower_core::entities::{Gift, ReservationUpdate};
use shower_core::error::Collection;
use shower_core::traits::{GiftRepository, RepoResult};

use crate::mappers::ReservationRow;
use crate::models::GiftModel;

use super::error::{map_read_error, map_write_error};

const GIFT_COLUMNS: &str = "id, name, description, category, price_range, icon, image_url, \
     product_url, reservations, reserved_by, status, group_members, created_at";

/// PostgreSQL implementation of GiftRepository
#[derive(Clone)]
pub struct PgGiftRepository {
    pool: PgPool,
}

impl PgGiftRepository {
    /// Create a new PgGiftRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GiftRepository for PgGiftRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Gift>> {
        let sql = format!("SELECT {GIFT_COLUMNS} FROM gifts ORDER BY created_at DESC");
        let results = sqlx::query_as::<_, GiftModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_read_error(Collection::Gifts))?;

        Ok(results.into_iter().map(Gift::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Gift>> {
        let sql = format!("SELECT {GIFT_COLUMNS} FROM gifts WHERE id = $1");
        let result = sqlx::query_as::<_, GiftModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error(Collection::Gifts))?;

        Ok(result.map(Gift::from))
    }

    #[instrument(skip(self, update), fields(reservations = update.reservations.len()))]
    async fn update_reservations(&self, id: Uuid, update: &ReservationUpdate) -> RepoResult<Gift> {
        let row = ReservationRow::new(update);
        let sql = format!(
            "UPDATE gifts SET reservations = $2, reserved_by = $3, status = $4 \
             WHERE id = $1 RETURNING {GIFT_COLUMNS}"
        );
        let result = sqlx::query_as::<_, GiftModel>(&sql)
            .bind(id)
            .bind(row.reservations)
            .bind(row.reserved_by)
            .bind(row.status)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error(Collection::Gifts, id))?;

        Ok(Gift::from(result))
    }
}
