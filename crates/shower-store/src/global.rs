//! Process-wide store client
//!
//! Built lazily on first use and never replaced afterwards.

use std::sync::OnceLock;

use tracing::info;

use shower_common::StoreConfig;

use crate::client::{ClientContext, StoreClient};
use crate::error::StoreError;

static STORE_CLIENT: OnceLock<StoreClient> = OnceLock::new();

/// Get the process-wide store client, creating it on first use.
///
/// The first successful call fixes the client for the life of the process;
/// later calls return it regardless of `context` or `config`. A failed
/// creation stores nothing, so a later call may still succeed.
///
/// ## Errors
/// Returns `MissingCredentials` when called in a live context before any
/// client exists and the endpoint or key is absent.
pub fn global_client(
    context: ClientContext,
    config: &StoreConfig,
) -> Result<&'static StoreClient, StoreError> {
    if let Some(client) = STORE_CLIENT.get() {
        return Ok(client);
    }

    let client = StoreClient::from_config(config, context)?;
    let client = STORE_CLIENT.get_or_init(|| client);
    info!(url = client.base_url(), placeholder = client.is_placeholder(), "Store client ready");
    Ok(client)
}
