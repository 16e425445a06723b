//! Store reachability probe

use async_trait::async_trait;
use tracing::instrument;

use shower_core::error::Collection;
use shower_core::traits::{HealthCheck, RepoResult};

use crate::client::StoreClient;

use super::error::map_fetch_error;

/// Reads one guest row to prove the store answers with the configured key
#[derive(Clone)]
pub struct RestHealthCheck {
    client: StoreClient,
}

impl RestHealthCheck {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HealthCheck for RestHealthCheck {
    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        self.client
            .table(Collection::Guests.table())
            .limit(1)
            .select::<serde_json::Value>()
            .await
            .map(|_| ())
            .map_err(map_fetch_error(Collection::Guests))
    }
}
