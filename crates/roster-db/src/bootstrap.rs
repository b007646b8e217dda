//! Startup sequence: connect, migrate, seed
//!
//! Connect and migrate failures are fatal because the API cannot serve
//! anything without the table. A seed failure is logged and swallowed:
//! an empty roster is still a valid state for every endpoint.

use roster_common::{AppError, AppResult};
use tracing::{error, info};

use crate::migrate::run_migrations;
use crate::pool::{create_pool, DatabaseConfig, PgPool};
use crate::repositories::PgMemberRepository;
use crate::seed::seed_members;

/// Run the storage bootstrap to completion and hand back the pool
pub async fn bootstrap(config: &DatabaseConfig) -> AppResult<PgPool> {
    info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        "Connecting to PostgreSQL..."
    );
    let pool = create_pool(config).await.map_err(|e| {
        error!(error = %e, "Failed to connect to the database");
        AppError::database(e)
    })?;
    info!("PostgreSQL connection established");

    run_migrations(&pool).await.map_err(|e| {
        error!(error = %e, "Failed to migrate the database");
        AppError::migration(e)
    })?;

    let repo = PgMemberRepository::new(pool.clone());
    if let Err(e) = seed_members(&repo).await {
        error!(error = %e, code = e.code(), "Failed to seed members");
    }

    Ok(pool)
}
