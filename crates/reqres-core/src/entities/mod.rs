//! Domain entities - core business objects

mod role;
mod user;

pub use role::{NewRole, Role, RoleChanges, DEFAULT_ROLE_ID};
pub use user::{NewUser, RoleChange, RoleSummary, User, UserChanges};
