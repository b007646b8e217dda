//! Schema migration
//!
//! The schema is a single additive migration: it creates the members table
//! when absent and is a no-op otherwise.

use sqlx::PgPool;
use tracing::{info, instrument};

const CREATE_MEMBERS: &str = include_str!("../migrations/0001_create_members.sql");

/// Ensure the members table and its index exist
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(CREATE_MEMBERS).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
