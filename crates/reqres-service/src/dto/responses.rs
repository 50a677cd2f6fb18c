//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output and `ToSchema` for
//! the OpenAPI document.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

// ============================================================================
// Role Responses
// ============================================================================

/// Role as returned by the API
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RoleResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// `GET /roles`
#[derive(Debug, Serialize, ToSchema)]
pub struct RoleListResponse {
    pub data: Vec<RoleResponse>,
}

/// `GET /roles/:id`
#[derive(Debug, Serialize, ToSchema)]
pub struct RoleDataResponse {
    pub data: RoleResponse,
}

/// Role write result with a confirmation message
#[derive(Debug, Serialize, ToSchema)]
pub struct RoleMessageResponse {
    #[schema(example = "Role created successfully")]
    pub message: String,
    pub data: RoleResponse,
}

impl RoleMessageResponse {
    pub fn new(message: impl Into<String>, data: impl Into<RoleResponse>) -> Self {
        Self {
            message: message.into(),
            data: data.into(),
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Role joined onto a user read
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserRoleResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// User as returned by the API. `role` is null when the role row is missing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub job: Option<String>,
    pub role_id: Option<i64>,
    pub role: Option<UserRoleResponse>,
}

/// `GET /users/:id`
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDataResponse {
    pub data: UserResponse,
}

/// `GET /users`
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
    pub data: Vec<UserResponse>,
}

/// `POST /users`. Echoes the submitted name and job.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedUserResponse {
    pub name: String,
    pub job: String,
    pub id: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// `PUT /users/:id`. Fields not in the request echo as empty strings.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdatedUserResponse {
    pub name: String,
    pub job: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Readiness probe
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    #[schema(example = "ready")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

impl ReadinessResponse {
    pub fn is_ready(&self) -> bool {
        self.checks.database
    }
}

/// Individual dependency checks
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthChecks {
    pub database: bool,
}
