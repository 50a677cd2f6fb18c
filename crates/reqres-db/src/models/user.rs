//! User database model

use sqlx::FromRow;

/// A users row left-joined with its role. Every role column is NULL when the role row is missing.
#[derive(Debug, Clone, FromRow)]
pub struct UserWithRoleModel {
    pub id: i64,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub job: Option<String>,
    pub role_id: Option<i64>,
    pub role_name: Option<String>,
    pub role_description: Option<String>,
    pub role_is_active: Option<bool>,
}
