//! # roster-db
//!
//! Database layer implementing the member repository with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool built from the `DB_*` settings (TLS disabled)
//! - The single additive schema migration
//! - One-time seeding of the canonical roster
//! - Database models with SQLx `FromRow` derives and entity mappers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_common::AppConfig;
//! use roster_db::{bootstrap, DatabaseConfig, PgMemberRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = bootstrap(&DatabaseConfig::from(&config.database)).await?;
//!     let repo = PgMemberRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod bootstrap;
pub mod mappers;
#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod migrate;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod seed;

// Re-export commonly used types
pub use bootstrap::bootstrap;
#[cfg(any(test, feature = "test-util"))]
pub use memory::InMemoryMemberRepository;
pub use migrate::run_migrations;
pub use pool::{create_pool, create_pool_in_schema, DatabaseConfig, PgPool};
pub use repositories::PgMemberRepository;
pub use seed::{seed_members, SeedOutcome};
