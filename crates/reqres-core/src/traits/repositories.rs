//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{NewRole, NewUser, Role, RoleChange, RoleChanges, User, UserChanges};
use crate::error::DomainError;
use crate::value_objects::PageRequest;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Role Repository
// ============================================================================

#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// List roles ordered by name, optionally including deactivated ones
    async fn list(&self, include_inactive: bool) -> RepoResult<Vec<Role>>;

    /// Find role by ID, active or not
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Role>>;

    /// Find role by ID only if it is active
    async fn find_active(&self, id: i64) -> RepoResult<Option<Role>>;

    /// Check for a case-insensitive name match among all roles, optionally ignoring one id
    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool>;

    /// Insert a new active role and return the stored row
    async fn create(&self, role: &NewRole) -> RepoResult<Role>;

    /// Overwrite name and description, returning the stored row
    async fn update(&self, id: i64, changes: &RoleChanges) -> RepoResult<Role>;

    /// Mark a role inactive, returning the stored row
    async fn deactivate(&self, id: i64) -> RepoResult<Role>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Count users, optionally restricted to one role
    async fn count(&self, role_filter: Option<i64>) -> RepoResult<i64>;

    /// Fetch one page of users with their roles, optionally restricted to one role
    async fn list(&self, role_filter: Option<i64>, page: PageRequest) -> RepoResult<Vec<User>>;

    /// Find user by ID with its role
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Insert a user and return its new id
    async fn create(&self, user: &NewUser) -> RepoResult<i64>;

    /// Apply the supplied fields. Returns false when no such user exists.
    async fn update(&self, id: i64, changes: &UserChanges) -> RepoResult<bool>;

    /// Hard delete. Returns the number of rows removed.
    async fn delete(&self, id: i64) -> RepoResult<u64>;

    /// Append to the role change audit trail
    async fn record_role_change(&self, change: &RoleChange) -> RepoResult<()>;

    /// Role change history for a user, oldest first
    async fn role_changes(&self, user_id: i64) -> RepoResult<Vec<RoleChange>>;
}
