//! Hosted store HTTP client.
//!
//! Speaks the PostgREST dialect exposed under `/rest/v1`: every table is a
//! resource, filters and ordering travel in the query string, and writes ask
//! for the affected rows back with `Prefer: return=representation`.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use shower_common::StoreConfig;

use crate::error::StoreError;

/// Endpoint used when no real endpoint is configured outside a live context
pub const PLACEHOLDER_URL: &str = "https://placeholder.supabase.co";

/// Key paired with [`PLACEHOLDER_URL`]
pub const PLACEHOLDER_KEY: &str = "placeholder-key";

/// Where the client is being created
///
/// Offline covers builds, tooling and tests that never reach the network;
/// a missing configuration is tolerated there. Live is a running server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientContext {
    Offline,
    Live,
}

/// Sort direction for `order=`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Error body returned by PostgREST
#[derive(Debug, Deserialize)]
struct RestError {
    message: String,
}

/// Client for the hosted store.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl StoreClient {
    /// Build a client for an endpoint and public key.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(StoreError::InvalidUrl(base_url));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(StoreError::Http)?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Build a client from configuration.
    ///
    /// Missing credentials yield the placeholder client offline and
    /// `MissingCredentials` in a live context.
    pub fn from_config(config: &StoreConfig, context: ClientContext) -> Result<Self, StoreError> {
        let timeout = Duration::from_secs(config.timeout_secs);

        match (config.url.as_deref(), config.anon_key.as_deref()) {
            (Some(url), Some(key)) if config.has_credentials() => Self::new(url, key, timeout),
            _ => match context {
                ClientContext::Offline => {
                    debug!("Store credentials absent, using placeholder client");
                    Self::new(PLACEHOLDER_URL, PLACEHOLDER_KEY, timeout)
                }
                ClientContext::Live => Err(StoreError::MissingCredentials),
            },
        }
    }

    /// Whether this client points at the placeholder endpoint
    pub fn is_placeholder(&self) -> bool {
        self.base_url == PLACEHOLDER_URL
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a query against one table
    pub fn table<'a>(&'a self, table: &'a str) -> TableQuery<'a> {
        TableQuery {
            client: self,
            table,
            params: Vec::new(),
        }
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        self.http
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

/// A filtered, ordered view of one table
///
/// Consumed by exactly one of `select`, `update` or `insert`.
#[derive(Debug)]
pub struct TableQuery<'a> {
    client: &'a StoreClient,
    table: &'a str,
    params: Vec<(String, String)>,
}

impl TableQuery<'_> {
    /// `column=eq.value`
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.params
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// `order=column.asc|desc`
    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.params
            .push(("order".to_string(), format!("{column}.{}", order.as_str())));
        self
    }

    /// `limit=n`
    pub fn limit(mut self, n: usize) -> Self {
        self.params.push(("limit".to_string(), n.to_string()));
        self
    }

    /// Read matching rows
    pub async fn select<T: DeserializeOwned>(self) -> Result<Vec<T>, StoreError> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(self.params);

        debug!(table = self.table, ?params, "select");
        let resp = self
            .client
            .request(Method::GET, self.table)
            .query(&params)
            .send()
            .await?;

        decode(resp).await
    }

    /// Patch matching rows and return them as stored
    pub async fn update<B, T>(self, body: &B) -> Result<Vec<T>, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(table = self.table, params = ?self.params, "update");
        let resp = self
            .client
            .request(Method::PATCH, self.table)
            .query(&self.params)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;

        decode(resp).await
    }

    /// Insert one row and return it as stored
    pub async fn insert<B, T>(self, body: &B) -> Result<Vec<T>, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(table = self.table, "insert");
        let resp = self
            .client
            .request(Method::POST, self.table)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;

        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<Vec<T>, StoreError> {
    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<RestError>(&text)
            .map(|e| e.message)
            .unwrap_or(text);
        return Err(StoreError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&text)?)
}
