//! # reqres-core
//!
//! Domain layer containing entities, value objects, input validation, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    NewRole, NewUser, Role, RoleChange, RoleChanges, RoleSummary, User, UserChanges,
    DEFAULT_ROLE_ID,
};
pub use error::DomainError;
pub use traits::{RepoResult, RoleRepository, UserRepository};
pub use value_objects::{avatar_url, random_avatar, PageRequest, PersonName};
