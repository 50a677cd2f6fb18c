//! OpenAPI document served at `/api-docs/openapi.json`

use reqres_service::{
    CreateRoleRequest, CreateUserRequest, CreatedUserResponse, HealthChecks, HealthResponse,
    ReadinessResponse, RoleDataResponse, RoleListResponse, RoleMessageResponse, RoleResponse,
    UpdateRoleRequest, UpdateUserRequest, UpdatedUserResponse, UserDataResponse,
    UserListResponse, UserResponse, UserRoleResponse,
};
use utoipa::OpenApi;

use crate::handlers::{health, roles, users};
use crate::response::ErrorResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Reqres API",
        description = "Users and roles CRUD service"
    ),
    paths(
        roles::list_roles,
        roles::get_role,
        roles::create_role,
        roles::update_role,
        roles::deactivate_role,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        health::health_check,
        health::readiness_check,
    ),
    components(schemas(
        RoleResponse,
        RoleListResponse,
        RoleDataResponse,
        RoleMessageResponse,
        CreateRoleRequest,
        UpdateRoleRequest,
        UserRoleResponse,
        UserResponse,
        UserDataResponse,
        UserListResponse,
        CreateUserRequest,
        UpdateUserRequest,
        CreatedUserResponse,
        UpdatedUserResponse,
        HealthResponse,
        ReadinessResponse,
        HealthChecks,
        ErrorResponse,
    )),
    tags(
        (name = "roles", description = "Role management"),
        (name = "users", description = "User management"),
        (name = "health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
