//! # celeb-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `celeb-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations, including the aggregate ranking queries
//!
//! ## Usage
//!
//! ```rust,ignore
//! use celeb_db::pool::{create_pool, DatabaseConfig};
//! use celeb_db::repositories::PgCelebrityRepository;
//! use celeb_core::traits::CelebrityRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let celebrities = PgCelebrityRepository::new(pool).find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{
    create_pool, create_pool_from_env, ping, run_migrations, DatabaseConfig, MigrationError, PgPool,
};
pub use repositories::{
    PgAliasRepository, PgAnalyticsRepository, PgCelebrityRepository, PgInteractionRepository,
};
