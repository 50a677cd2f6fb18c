//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A role name no other test uses
pub fn unique_role_name() -> String {
    format!("Role{}", unique_suffix())
}

/// Body for `POST /api/roles`
pub fn role_body(name: &str) -> Value {
    json!({ "name": name })
}

/// Body for `POST /api/users`
pub fn user_body(name: &str, job: &str) -> Value {
    json!({ "name": name, "job": job })
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Role response
#[derive(Debug, Deserialize)]
pub struct RoleResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

/// `{data: Role}`
#[derive(Debug, Deserialize)]
pub struct RoleData {
    pub data: RoleResponse,
}

/// `{data: [Role]}`
#[derive(Debug, Deserialize)]
pub struct RoleList {
    pub data: Vec<RoleResponse>,
}

/// `{message, data: Role}`
#[derive(Debug, Deserialize)]
pub struct RoleMessage {
    pub message: String,
    pub data: RoleResponse,
}

/// Role joined onto a user
#[derive(Debug, Deserialize)]
pub struct UserRole {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub job: Option<String>,
    pub role_id: Option<i64>,
    pub role: Option<UserRole>,
}

/// `{data: User}`
#[derive(Debug, Deserialize)]
pub struct UserData {
    pub data: UserResponse,
}

/// Paginated user listing
#[derive(Debug, Deserialize)]
pub struct UserList {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
    pub data: Vec<UserResponse>,
}

/// `POST /api/users` echo
#[derive(Debug, Deserialize)]
pub struct CreatedUser {
    pub name: String,
    pub job: String,
    pub id: i64,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// `PUT /api/users/:id` echo
#[derive(Debug, Deserialize)]
pub struct UpdatedUser {
    pub name: String,
    pub job: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}
