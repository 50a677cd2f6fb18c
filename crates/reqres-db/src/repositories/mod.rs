//! Repository implementations

pub mod error;
mod role;
mod user;

pub use role::SqliteRoleRepository;
pub use user::SqliteUserRepository;
