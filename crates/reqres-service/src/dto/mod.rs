//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs that keep raw JSON values so their shape can be checked field by field
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    messages, CreateRoleRequest, CreateUserRequest, ListRolesQuery, ListUsersQuery, RequestedRole,
    RoleUpdate, UpdateRoleRequest, UpdateUserRequest, UserDraft, UserListFilter, UserUpdate,
    ValidateRequest,
};

// Re-export commonly used response types
pub use responses::{
    CreatedUserResponse, HealthChecks, HealthResponse, ReadinessResponse, RoleDataResponse,
    RoleListResponse, RoleMessageResponse, RoleResponse, UpdatedUserResponse, UserDataResponse,
    UserListResponse, UserResponse, UserRoleResponse,
};
