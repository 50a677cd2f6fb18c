//! Role entity - a named permission category assignable to users

use chrono::{DateTime, Utc};

/// Id of the built-in "User" role. It always exists and can never be deactivated.
pub const DEFAULT_ROLE_ID: i64 = 1;

/// Role entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Role {
    /// Case-insensitive name comparison, the same rule the uniqueness constraint uses
    pub fn has_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Data for inserting a role. Values are already trimmed and normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    pub name: String,
    pub description: Option<String>,
}

impl NewRole {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }
}

/// Resolved values written by a role update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleChanges {
    pub name: String,
    pub description: Option<String>,
}
