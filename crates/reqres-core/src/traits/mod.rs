//! Repository traits (ports)

mod repositories;

pub use repositories::{RepoResult, RoleRepository, UserRepository};
