//! Database reachability probe

use async_trait::async_trait;
use sqlx::PgPool;

use shower_core::error::DomainError;
use shower_core::traits::{HealthCheck, RepoResult};

/// Runs `SELECT 1` on the pool
#[derive(Clone)]
pub struct PgHealthCheck {
    pool: PgPool,
}

impl PgHealthCheck {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheck for PgHealthCheck {
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::InternalError(e.to_string()))
    }
}
