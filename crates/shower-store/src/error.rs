//! Error types for the hosted store client

use thiserror::Error;

/// Errors raised while talking to the hosted store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport failure, timeout included
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success status returned by the store
    #[error("Store responded {status}: {message}")]
    Status { status: u16, message: String },

    /// Endpoint or key absent in a live context
    #[error("Missing store environment variables. Please set PUBLIC_SUPABASE_URL and PUBLIC_SUPABASE_ANON_KEY")]
    MissingCredentials,

    /// Endpoint could not be parsed
    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),
}

impl StoreError {
    /// The store answered, as opposed to being unreachable
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}
