//! # shower-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! An alternate backend for deployments that hold a connection string to the
//! store's database instead of its public REST key. It handles:
//!
//! - Connection pool management and schema creation
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shower_common::AppConfig;
//! use shower_db::{create_pool, PgGiftRepository};
//! use shower_core::traits::GiftRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(config.database.as_ref().unwrap()).await?;
//!     let gifts = PgGiftRepository::new(pool).find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_with, run_migrations, PgPool, PoolOptions};
pub use repositories::{PgGiftRepository, PgGuestRepository, PgHealthCheck, PgMessageRepository};
