//! User entity

use chrono::{DateTime, Utc};

use crate::value_objects::PersonName;

/// User entity with its role resolved through a left join
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub job: Option<String>,
    pub role_id: Option<i64>,
    /// Absent when the referenced role row is missing. Present for inactive roles too.
    pub role: Option<RoleSummary>,
}

/// Role data as seen from a user read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Data for inserting a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub job: String,
    pub role_id: i64,
}

impl NewUser {
    /// Build a user row from a display name, deriving email and avatar
    pub fn from_name(name: &PersonName, job: impl Into<String>, role_id: i64, avatar: String) -> Self {
        Self {
            email: name.email(),
            first_name: name.first.clone(),
            last_name: name.last.clone(),
            avatar,
            job: job.into(),
            role_id,
        }
    }
}

/// Partial user update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<PersonName>,
    pub job: Option<String>,
    pub role_id: Option<i64>,
}

/// Audit record of a user's role reassignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleChange {
    pub user_id: i64,
    pub old_role_id: Option<i64>,
    pub new_role_id: i64,
    pub changed_at: DateTime<Utc>,
}

impl RoleChange {
    pub fn new(user_id: i64, old_role_id: Option<i64>, new_role_id: i64) -> Self {
        Self {
            user_id,
            old_role_id,
            new_role_id,
            changed_at: Utc::now(),
        }
    }
}
