//! Role change audit model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for user_role_changes table
#[derive(Debug, Clone, FromRow)]
pub struct RoleChangeModel {
    pub id: i64,
    pub user_id: i64,
    pub old_role_id: Option<i64>,
    pub new_role_id: i64,
    pub changed_at: DateTime<Utc>,
}
