//! Gift service
//!
//! Lists the registry and manages multi-person reservations.

use tracing::{error, info, instrument};
use uuid::Uuid;

use shower_core::entities::Gift;
use shower_core::error::{Collection, DomainError};

use crate::dto::{GiftListResponse, GiftResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Category value that disables filtering
pub const ALL_CATEGORIES: &str = "all";

/// Gift service
pub struct GiftService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GiftService<'a> {
    /// Create a new GiftService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All gifts, newest first, with a missing reservation list read as empty
    #[instrument(skip(self))]
    pub async fn fetch_gifts(&self) -> ServiceResult<Vec<Gift>> {
        let gifts = self
            .ctx
            .gift_repo()
            .find_all()
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching gifts"))?;

        Ok(gifts)
    }

    /// Append `name` to a gift's reservations
    ///
    /// Duplicates are kept. Read-modify-write: a concurrent change to the same
    /// gift between the read and the write is overwritten.
    #[instrument(skip(self))]
    pub async fn reserve_gift(&self, gift_id: Uuid, name: &str) -> ServiceResult<Gift> {
        if name.trim().is_empty() {
            return Err(ServiceError::validation("Name is required"));
        }

        let gift = self.load(gift_id).await?;
        let update = gift.with_reservation(name);

        let gift = self
            .ctx
            .gift_repo()
            .update_reservations(gift_id, &update)
            .await
            .inspect_err(|e| error!(%gift_id, error = %e, "Error reserving gift"))?;

        info!(%gift_id, name, count = gift.reservation_count(), "Gift reserved");
        Ok(gift)
    }

    /// Drop every occurrence of `name` from a gift's reservations
    #[instrument(skip(self))]
    pub async fn remove_reservation(&self, gift_id: Uuid, name: &str) -> ServiceResult<Gift> {
        let gift = self.load(gift_id).await?;
        let update = gift.without_reservation(name);

        let gift = self
            .ctx
            .gift_repo()
            .update_reservations(gift_id, &update)
            .await
            .inspect_err(|e| error!(%gift_id, error = %e, "Error removing reservation"))?;

        info!(%gift_id, name, count = gift.reservation_count(), "Reservation removed");
        Ok(gift)
    }

    /// Registry filtered by category, with the category set
    #[instrument(skip(self))]
    pub async fn list(&self, category: Option<&str>) -> ServiceResult<GiftListResponse> {
        let gifts = self.fetch_gifts().await?;
        let active = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(ALL_CATEGORIES);

        let categories = categories(&gifts);
        let gifts = gifts
            .iter()
            .filter(|g| active == ALL_CATEGORIES || g.category == active)
            .map(GiftResponse::from)
            .collect();

        Ok(GiftListResponse {
            gifts,
            categories,
            active_category: active.to_string(),
        })
    }

    async fn load(&self, gift_id: Uuid) -> ServiceResult<Gift> {
        self.ctx
            .gift_repo()
            .find_by_id(gift_id)
            .await
            .inspect_err(|e| error!(%gift_id, error = %e, "Error loading gift"))?
            .ok_or_else(|| DomainError::not_found(Collection::Gifts, gift_id).into())
    }
}

/// `"all"` followed by each distinct non-empty category in first-seen order
pub fn categories(gifts: &[Gift]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for gift in gifts {
        if !gift.category.is_empty() && !categories.contains(&gift.category) {
            categories.push(gift.category.clone());
        }
    }
    categories
}
