//! Database models with SQLx `FromRow` derives

mod role;
mod role_change;
mod user;

pub use role::RoleModel;
pub use role_change::RoleChangeModel;
pub use user::UserWithRoleModel;
