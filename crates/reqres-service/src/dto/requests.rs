//! Request DTOs for API endpoints
//!
//! Body fields are kept as raw JSON values so a missing key, an explicit `null`
//! and a value of the wrong type can each be told apart. `ValidateRequest`
//! turns a request into the typed input its service expects.

use reqres_core::entities::{NewRole, DEFAULT_ROLE_ID};
use reqres_core::error::DomainError;
use reqres_core::validation::{
    non_empty_string, normalize_description, optional_string, parse_role_filter, positive_integer,
    present,
};
use reqres_core::value_objects::PageRequest;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::services::{ServiceError, ServiceResult};

/// Client-facing validation messages
pub mod messages {
    pub const INVALID_ROLE_ID: &str = "Invalid role ID. Must be a positive integer.";
    pub const ROLE_NAME_REQUIRED: &str = "Role name is required and must be a non-empty string";
    pub const ROLE_NAME_NOT_EMPTY: &str = "Role name must be a non-empty string";
    pub const ROLE_DESCRIPTION_NOT_STRING: &str = "Role description must be a string";
    pub const ROLE_UPDATE_EMPTY: &str = "At least one field (name or description) must be provided";
    pub const INVALID_ROLE_FILTER: &str = "Invalid role parameter. Must be a positive integer.";
    pub const NAME_AND_JOB_REQUIRED: &str = "Name and job are required";
    pub const USER_UPDATE_EMPTY: &str = "Name, job, or role_id is required";
    pub const NAME_NOT_STRING: &str = "Name must be a string";
    pub const JOB_NOT_STRING: &str = "Job must be a string";
}

/// Turn a deserialized request into validated service input
pub trait ValidateRequest {
    type Output;

    fn validate(self) -> ServiceResult<Self::Output>;
}

/// Keep an explicit `null` as `Some(Value::Null)`; a missing key falls back to `None` via `#[serde(default)]`
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

// ============================================================================
// Role Requests
// ============================================================================

/// Query parameters for listing roles
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRolesQuery {
    /// `true` to include deactivated roles
    pub all: Option<String>,
}

impl ListRolesQuery {
    pub fn include_inactive(&self) -> bool {
        self.all.as_deref() == Some("true")
    }
}

impl ValidateRequest for ListRolesQuery {
    /// Whether deactivated roles are included
    type Output = bool;

    fn validate(self) -> ServiceResult<bool> {
        Ok(self.include_inactive())
    }
}

/// Create role request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateRoleRequest {
    #[serde(default, deserialize_with = "present_value")]
    #[schema(value_type = String, example = "QA")]
    pub name: Option<Value>,

    #[serde(default, deserialize_with = "present_value")]
    #[schema(value_type = Option<String>, example = "Quality assurance")]
    pub description: Option<Value>,
}

impl ValidateRequest for CreateRoleRequest {
    type Output = NewRole;

    fn validate(self) -> ServiceResult<NewRole> {
        let name = non_empty_string(self.name.as_ref())
            .ok_or_else(|| ServiceError::validation(messages::ROLE_NAME_REQUIRED))?;

        let description = optional_string(self.description.as_ref())
            .map_err(|_| ServiceError::validation(messages::ROLE_DESCRIPTION_NOT_STRING))?;

        Ok(NewRole::new(name, normalize_description(description)))
    }
}

/// Update role request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRoleRequest {
    #[serde(default, deserialize_with = "present_value")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,

    #[serde(default, deserialize_with = "present_value")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,
}

/// Validated role update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleUpdate {
    /// Trimmed new name
    pub name: Option<String>,
    /// New description, `Some(None)` clears it
    pub description: Option<Option<String>>,
}

impl ValidateRequest for UpdateRoleRequest {
    type Output = RoleUpdate;

    fn validate(self) -> ServiceResult<RoleUpdate> {
        if self.name.is_none() && self.description.is_none() {
            return Err(ServiceError::validation(messages::ROLE_UPDATE_EMPTY));
        }

        let name = match &self.name {
            None => None,
            Some(value) => Some(
                non_empty_string(Some(value))
                    .ok_or_else(|| ServiceError::validation(messages::ROLE_NAME_NOT_EMPTY))?
                    .to_string(),
            ),
        };

        let description = match &self.description {
            None => None,
            Some(value) => {
                let raw = optional_string(Some(value))
                    .map_err(|_| ServiceError::validation(messages::ROLE_DESCRIPTION_NOT_STRING))?;
                Some(normalize_description(raw))
            }
        };

        Ok(RoleUpdate { name, description })
    }
}

// ============================================================================
// User Requests
// ============================================================================

/// Query parameters for listing users
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Page number, default 1
    pub page: Option<String>,
    /// Page size, default 6
    pub per_page: Option<String>,
    /// Only users with this role id
    pub role: Option<String>,
}

/// Validated user listing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserListFilter {
    pub page: PageRequest,
    pub role_id: Option<i64>,
}

impl ValidateRequest for ListUsersQuery {
    type Output = UserListFilter;

    fn validate(self) -> ServiceResult<UserListFilter> {
        let role_id = match self.role.as_deref() {
            None => None,
            Some(raw) => Some(
                parse_role_filter(raw)
                    .ok_or_else(|| ServiceError::validation(messages::INVALID_ROLE_FILTER))?,
            ),
        };

        Ok(UserListFilter {
            page: PageRequest::from_query(self.page.as_deref(), self.per_page.as_deref()),
            role_id,
        })
    }
}

/// Create user request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "present_value")]
    #[schema(value_type = String, example = "John Doe")]
    pub name: Option<Value>,

    #[serde(default, deserialize_with = "present_value")]
    #[schema(value_type = String, example = "Engineer")]
    pub job: Option<Value>,

    #[serde(default, deserialize_with = "present_value")]
    #[schema(value_type = Option<i64>, example = 1)]
    pub role_id: Option<Value>,
}

/// Validated user creation input. `name` and `job` are the strings as sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub job: String,
    pub role_id: i64,
}

impl ValidateRequest for CreateUserRequest {
    type Output = UserDraft;

    fn validate(self) -> ServiceResult<UserDraft> {
        if non_empty_string(self.name.as_ref()).is_none() || non_empty_string(self.job.as_ref()).is_none() {
            return Err(ServiceError::validation(messages::NAME_AND_JOB_REQUIRED));
        }

        let role_id = match present(self.role_id.as_ref()) {
            None => DEFAULT_ROLE_ID,
            Some(value) => positive_integer(value).ok_or(DomainError::InvalidRoleAssignment)?,
        };

        Ok(UserDraft {
            name: raw_string(self.name),
            job: raw_string(self.job),
            role_id,
        })
    }
}

/// Update user request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "present_value")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,

    #[serde(default, deserialize_with = "present_value")]
    #[schema(value_type = Option<String>)]
    pub job: Option<Value>,

    #[serde(default, deserialize_with = "present_value")]
    #[schema(value_type = Option<i64>)]
    pub role_id: Option<Value>,
}

/// A role id as requested in a user update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedRole {
    Id(i64),
    /// Present but not a positive integer; rejected once the user is known to exist
    Malformed,
}

/// Validated user update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub job: Option<String>,
    pub role: Option<RequestedRole>,
}

impl ValidateRequest for UpdateUserRequest {
    type Output = UserUpdate;

    fn validate(self) -> ServiceResult<UserUpdate> {
        let name = supplied_string(self.name.as_ref(), messages::NAME_NOT_STRING)?;
        let job = supplied_string(self.job.as_ref(), messages::JOB_NOT_STRING)?;
        let role = present(self.role_id.as_ref()).map(|value| {
            positive_integer(value).map_or(RequestedRole::Malformed, RequestedRole::Id)
        });

        if name.is_none() && job.is_none() && role.is_none() {
            return Err(ServiceError::validation(messages::USER_UPDATE_EMPTY));
        }

        Ok(UserUpdate { name, job, role })
    }
}

/// A string field that counts as supplied only when it is not null and not blank
fn supplied_string(value: Option<&Value>, not_string: &'static str) -> ServiceResult<Option<String>> {
    let raw = optional_string(present(value)).map_err(|_| ServiceError::validation(not_string))?;
    Ok(raw.filter(|s| !s.trim().is_empty()).map(ToString::to_string))
}

fn raw_string(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}
