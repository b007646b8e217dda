//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use roster_common::{AppConfig, AppError, AppResult};
use roster_db::{bootstrap, DatabaseConfig, PgMemberRepository};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router(state.assets_dir());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Bootstrap storage (connect, migrate, seed) and create AppState
pub async fn create_app_state(config: &AppConfig) -> AppResult<AppState> {
    let db_config = DatabaseConfig::from(&config.database);
    let pool = bootstrap(&db_config).await?;

    let members = Arc::new(PgMemberRepository::new(pool));
    Ok(AppState::new(members, &config.assets.dir))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> AppResult<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}

/// Run the complete server with configuration
///
/// Storage is fully bootstrapped before the listener is bound.
pub async fn run(config: AppConfig) -> AppResult<()> {
    let state = create_app_state(&config).await?;
    let app = create_app(state);
    run_server(app, &config.api.address()).await
}
