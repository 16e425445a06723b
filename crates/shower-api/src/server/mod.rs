//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use shower_common::{AppConfig, AppError, AppResult, StoreBackend};
use shower_db::{
    create_pool, run_migrations, PgGiftRepository, PgGuestRepository, PgHealthCheck,
    PgMessageRepository,
};
use shower_service::{ServiceContext, ServiceContextBuilder};
use shower_store::{
    global_client, ClientContext, MemoryStore, RestGiftRepository, RestGuestRepository,
    RestHealthCheck, RestMessageRepository,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes skip the rate limiter.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    api.merge(health_routes()).with_state(state)
}

/// Wire the repositories for the configured backend
pub async fn create_service_context(config: &AppConfig) -> AppResult<ServiceContext> {
    let builder = ServiceContextBuilder::new().event_starts_at(config.event.starts_at);

    let builder = match config.store.backend {
        StoreBackend::Rest => {
            let client = global_client(ClientContext::Live, &config.store)
                .map_err(|e| AppError::Config(e.to_string()))?;
            info!(url = client.base_url(), "Using hosted store");

            builder
                .guest_repo(Arc::new(RestGuestRepository::new(client.clone())))
                .gift_repo(Arc::new(RestGiftRepository::new(client.clone())))
                .message_repo(Arc::new(RestMessageRepository::new(client.clone())))
                .health(Arc::new(RestHealthCheck::new(client.clone())))
        }
        StoreBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or_else(|| AppError::Config("DATABASE_URL is required".to_string()))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(database)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            run_migrations(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            builder
                .guest_repo(Arc::new(PgGuestRepository::new(pool.clone())))
                .gift_repo(Arc::new(PgGiftRepository::new(pool.clone())))
                .message_repo(Arc::new(PgMessageRepository::new(pool.clone())))
                .health(Arc::new(PgHealthCheck::new(pool)))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory store; data is lost on restart");
            builder.store(MemoryStore::sample())
        }
    };

    builder.build().map_err(|e| AppError::Config(e.to_string()))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let service_context = create_service_context(&config).await?;
    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state);
    run_server(app, &addr).await
}
