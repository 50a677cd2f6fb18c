//! User handlers

use axum::{extract::State, Json};
use reqres_service::{
    CreateUserRequest, CreatedUserResponse, ListUsersQuery, ServiceError, UpdateUserRequest,
    UpdatedUserResponse, UserDataResponse, UserListResponse, UserService,
};

use crate::extractors::{UserId, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResult, Created, ErrorResponse, NoContent};
use crate::state::AppState;

/// List users, one page at a time
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "One page of users", body = UserListResponse),
        (status = 400, description = "Invalid role filter", body = ErrorResponse)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<ListUsersQuery>,
) -> ApiResult<Json<UserListResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.list_users(filter).await?))
}

/// Get a user with their role
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDataResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> ApiResult<Json<UserDataResponse>> {
    let user_id = user_id.ok_or_else(|| ServiceError::not_found("User"))?;

    let service = UserService::new(state.service_context());
    let data = service.get_user(user_id).await?;
    Ok(Json(UserDataResponse { data }))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreatedUserResponse),
        (status = 400, description = "Missing fields or invalid role", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<CreatedUserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.create_user(draft).await?;
    Ok(Created(Json(response)))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UpdatedUserResponse),
        (status = 400, description = "Invalid body or role", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    ValidatedJson(update): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UpdatedUserResponse>> {
    let user_id = user_id.ok_or_else(|| ServiceError::not_found("User"))?;

    let service = UserService::new(state.service_context());
    Ok(Json(service.update_user(user_id, update).await?))
}

/// Delete a user. Succeeds whether or not the user exists.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted")
    )
)]
pub async fn delete_user(State(state): State<AppState>, UserId(user_id): UserId) -> ApiResult<NoContent> {
    if let Some(user_id) = user_id {
        UserService::new(state.service_context()).delete_user(user_id).await?;
    }
    Ok(NoContent)
}
