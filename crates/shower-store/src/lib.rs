//! # shower-store
//!
//! Storage layer for the hosted store the site reads and writes.
//!
//! ## Overview
//!
//! - [`StoreClient`]: thin PostgREST client over `reqwest`
//! - [`global_client`]: process-wide client, created on first use
//! - `Rest*Repository`: repository traits from `shower-core` over the client
//! - [`MemoryStore`]: the same traits over process-local tables
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shower_common::AppConfig;
//! use shower_store::{global_client, ClientContext, RestGiftRepository};
//! use shower_core::traits::GiftRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let client = global_client(ClientContext::Live, &config.store)?;
//!     let gifts = RestGiftRepository::new(client.clone()).find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod global;
pub mod memory;
pub mod repositories;

// Re-export commonly used types
pub use client::{ClientContext, Order, StoreClient, TableQuery, PLACEHOLDER_KEY, PLACEHOLDER_URL};
pub use error::StoreError;
pub use global::global_client;
pub use memory::MemoryStore;
pub use repositories::{
    RestGiftRepository, RestGuestRepository, RestHealthCheck, RestMessageRepository,
};
