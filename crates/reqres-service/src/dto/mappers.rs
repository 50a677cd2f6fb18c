//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use reqres_core::entities::{Role, RoleSummary, User};

use super::responses::{RoleResponse, UserResponse, UserRoleResponse};

// ============================================================================
// Role Mappers
// ============================================================================

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            description: role.description,
            is_active: role.is_active,
            created_at: role.created_at,
        }
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<RoleSummary> for UserRoleResponse {
    fn from(role: RoleSummary) -> Self {
        Self {
            id: role.id,
            name: role.name,
            description: role.description,
            is_active: role.is_active,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            avatar: user.avatar,
            job: user.job,
            role_id: user.role_id,
            role: user.role.map(UserRoleResponse::from),
        }
    }
}
