//! REST implementation of GiftRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use shower_core::entities::{Gift, ReservationUpdate};
use shower_core::error::Collection;
use shower_core::traits::{GiftRepository, RepoResult};

use crate::client::{Order, StoreClient};

use super::error::{map_fetch_error, map_write_error, single_row};

/// Hosted store implementation of GiftRepository
#[derive(Clone)]
pub struct RestGiftRepository {
    client: StoreClient,
}

impl RestGiftRepository {
    /// Create a new RestGiftRepository
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GiftRepository for RestGiftRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Gift>> {
        self.client
            .table(Collection::Gifts.table())
            .order("created_at", Order::Desc)
            .select()
            .await
            .map_err(map_fetch_error(Collection::Gifts))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Gift>> {
        let rows: Vec<Gift> = self
            .client
            .table(Collection::Gifts.table())
            .eq("id", id)
            .select()
            .await
            .map_err(map_fetch_error(Collection::Gifts))?;

        Ok(rows.into_iter().next())
    }

    #[instrument(skip(self, update), fields(reservations = update.reservations.len()))]
    async fn update_reservations(&self, id: Uuid, update: &ReservationUpdate) -> RepoResult<Gift> {
        let rows: Vec<Gift> = self
            .client
            .table(Collection::Gifts.table())
            .eq("id", id)
            .update(update)
            .await
            .map_err(map_write_error(Collection::Gifts))?;

        single_row(rows, Collection::Gifts, id)
    }
}
