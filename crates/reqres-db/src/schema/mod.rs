//! Schema bootstrap: tables, legacy column migration and seed data

mod bootstrap;
mod seed;

pub use bootstrap::{initialize, BootstrapReport};
pub use seed::{SeedRole, SeedUser, SEED_ROLES, SEED_USERS};
