//! Role handlers
//!
//! Listing, lookup, creation, update and soft deactivation of roles.

use axum::{extract::State, Json};
use reqres_service::{
    CreateRoleRequest, ListRolesQuery, RoleDataResponse, RoleListResponse, RoleMessageResponse,
    RoleService, UpdateRoleRequest,
};

use crate::extractors::{RoleId, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResult, Created, ErrorResponse};
use crate::state::AppState;

pub const ROLE_CREATED: &str = "Role created successfully";
pub const ROLE_UPDATED: &str = "Role updated successfully";
pub const ROLE_DEACTIVATED: &str = "Role deactivated successfully";

/// List roles sorted by name
#[utoipa::path(
    get,
    path = "/api/roles",
    tag = "roles",
    params(ListRolesQuery),
    responses(
        (status = 200, description = "Roles sorted by name", body = RoleListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_roles(
    State(state): State<AppState>,
    ValidatedQuery(include_inactive): ValidatedQuery<ListRolesQuery>,
) -> ApiResult<Json<RoleListResponse>> {
    let service = RoleService::new(state.service_context());
    let data = service.list_roles(include_inactive).await?;
    Ok(Json(RoleListResponse { data }))
}

/// Get a role by id, active or not
#[utoipa::path(
    get,
    path = "/api/roles/{id}",
    tag = "roles",
    params(("id" = i64, Path, description = "Role ID")),
    responses(
        (status = 200, description = "The role", body = RoleDataResponse),
        (status = 400, description = "Invalid role ID", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse)
    )
)]
pub async fn get_role(
    State(state): State<AppState>,
    RoleId(role_id): RoleId,
) -> ApiResult<Json<RoleDataResponse>> {
    let service = RoleService::new(state.service_context());
    let data = service.get_role(role_id).await?;
    Ok(Json(RoleDataResponse { data }))
}

/// Create a role
#[utoipa::path(
    post,
    path = "/api/roles",
    tag = "roles",
    request_body = CreateRoleRequest,
    responses(
        (status = 201, description = "Role created", body = RoleMessageResponse),
        (status = 400, description = "Invalid name or description", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse)
    )
)]
pub async fn create_role(
    State(state): State<AppState>,
    ValidatedJson(role): ValidatedJson<CreateRoleRequest>,
) -> ApiResult<Created<Json<RoleMessageResponse>>> {
    let service = RoleService::new(state.service_context());
    let data = service.create_role(role).await?;
    Ok(Created(Json(RoleMessageResponse::new(ROLE_CREATED, data))))
}

/// Update a role's name and/or description
#[utoipa::path(
    put,
    path = "/api/roles/{id}",
    tag = "roles",
    params(("id" = i64, Path, description = "Role ID")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = RoleMessageResponse),
        (status = 400, description = "Invalid id or body", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse)
    )
)]
pub async fn update_role(
    State(state): State<AppState>,
    RoleId(role_id): RoleId,
    ValidatedJson(update): ValidatedJson<UpdateRoleRequest>,
) -> ApiResult<Json<RoleMessageResponse>> {
    let service = RoleService::new(state.service_context());
    let data = service.update_role(role_id, update).await?;
    Ok(Json(RoleMessageResponse::new(ROLE_UPDATED, data)))
}

/// Deactivate a role
#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    tag = "roles",
    params(("id" = i64, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role deactivated", body = RoleMessageResponse),
        (status = 400, description = "Default role, already inactive or invalid id", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse)
    )
)]
pub async fn deactivate_role(
    State(state): State<AppState>,
    RoleId(role_id): RoleId,
) -> ApiResult<Json<RoleMessageResponse>> {
    let service = RoleService::new(state.service_context());
    let data = service.deactivate_role(role_id).await?;
    Ok(Json(RoleMessageResponse::new(ROLE_DEACTIVATED, data)))
}
