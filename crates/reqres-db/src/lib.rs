//! # reqres-db
//!
//! Database layer implementing repository traits with SQLite via SQLx.
//!
//! ## Overview
//!
//! This crate provides SQLite implementations for the repository traits
//! defined in `reqres-core`. It handles:
//!
//! - Connection pool management
//! - Schema creation, legacy column migration and seed data
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reqres_db::{create_pool, schema, DatabaseConfig, SqliteRoleRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::in_memory()).await?;
//!     schema::initialize(&pool).await?;
//!     let role_repo = SqliteRoleRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, SqlitePool};
pub use repositories::{SqliteRoleRepository, SqliteUserRepository};
pub use schema::{initialize, BootstrapReport};
