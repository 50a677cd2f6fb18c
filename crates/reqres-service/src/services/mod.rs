//! Business logic services
//!
//! Role and user rules, and the orchestration of repository calls they need.

pub mod context;
pub mod error;
pub mod health;
pub mod role;
pub mod user;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use role::RoleService;
pub use user::UserService;
