//! Domain errors - error types for the domain layer
//!
//! Display strings are the user-facing messages.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Role not found")]
    RoleNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid role_id provided")]
    InvalidRoleAssignment,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("A role with this name already exists")]
    RoleNameTaken,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot deactivate the default User role")]
    CannotDeactivateDefaultRole,

    #[error("Role is already deactivated")]
    RoleAlreadyDeactivated,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for logs and metrics
    pub fn code(&self) -> &'static str {
        match self {
            Self::RoleNotFound(_) => "UNKNOWN_ROLE",
            Self::InvalidRoleAssignment => "INVALID_ROLE_ASSIGNMENT",
            Self::RoleNameTaken => "ROLE_NAME_TAKEN",
            Self::CannotDeactivateDefaultRole => "DEFAULT_ROLE_PROTECTED",
            Self::RoleAlreadyDeactivated => "ROLE_ALREADY_DEACTIVATED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RoleNotFound(_))
    }

    /// Check if this is a validation error. Business rule violations are reported as validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidRoleAssignment
                | Self::CannotDeactivateDefaultRole
                | Self::RoleAlreadyDeactivated
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::RoleNameTaken)
    }
}
