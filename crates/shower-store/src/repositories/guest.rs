//! REST implementation of GuestRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

use shower_core::entities::{ConfirmationChange, Guest};
use shower_core::error::Collection;
use shower_core::traits::{GuestRepository, RepoResult};

use crate::client::{Order, StoreClient};

use super::error::{map_fetch_error, map_write_error, single_row};

/// Fields patched by a confirmation toggle
#[derive(Debug, Serialize)]
struct ConfirmationPatch {
    confirmed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirmed_at: Option<Option<DateTime<Utc>>>,
}

impl From<ConfirmationChange> for ConfirmationPatch {
    fn from(change: ConfirmationChange) -> Self {
        Self {
            confirmed: change.confirmed,
            confirmed_at: change.confirmed_at,
        }
    }
}

/// Hosted store implementation of GuestRepository
#[derive(Clone)]
pub struct RestGuestRepository {
    client: StoreClient,
}

impl RestGuestRepository {
    /// Create a new RestGuestRepository
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GuestRepository for RestGuestRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Guest>> {
        self.client
            .table(Collection::Guests.table())
            .order("name", Order::Asc)
            .select()
            .await
            .map_err(map_fetch_error(Collection::Guests))
    }

    #[instrument(skip(self))]
    async fn update_confirmation(&self, id: i64, change: ConfirmationChange) -> RepoResult<Guest> {
        let rows: Vec<Guest> = self
            .client
            .table(Collection::Guests.table())
            .eq("id", id)
            .update(&ConfirmationPatch::from(change))
            .await
            .map_err(map_write_error(Collection::Guests))?;

        single_row(rows, Collection::Guests, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_decline_patch_leaves_timestamp_out() {
        let now = Utc.with_ymd_and_hms(2024, 12, 1, 10, 0, 0).unwrap();

        let body = serde_json::to_value(ConfirmationPatch::from(ConfirmationChange::new(
            Some(false),
            now,
        )))
        .unwrap();
        assert_eq!(body, serde_json::json!({ "confirmed": false }));

        let body =
            serde_json::to_value(ConfirmationPatch::from(ConfirmationChange::new(None, now)))
                .unwrap();
        assert_eq!(body, serde_json::json!({ "confirmed": null, "confirmed_at": null }));

        let body = serde_json::to_value(ConfirmationPatch::from(ConfirmationChange::new(
            Some(true),
            now,
        )))
        .unwrap();
        assert_eq!(body["confirmed"], serde_json::json!(true));
        assert_eq!(body["confirmed_at"], serde_json::json!("2024-12-01T10:00:00Z"));
    }
}
