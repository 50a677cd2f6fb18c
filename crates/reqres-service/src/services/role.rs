//! Role service
//!
//! Role listing, creation, renaming and soft deactivation.

use reqres_core::entities::{NewRole, RoleChanges, DEFAULT_ROLE_ID};
use reqres_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{RoleResponse, RoleUpdate};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Role service
pub struct RoleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoleService<'a> {
    /// Create a new RoleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List roles sorted by name
    #[instrument(skip(self))]
    pub async fn list_roles(&self, include_inactive: bool) -> ServiceResult<Vec<RoleResponse>> {
        let roles = self.ctx.role_repo().list(include_inactive).await?;
        Ok(roles.into_iter().map(RoleResponse::from).collect())
    }

    /// Get role by ID, active or not
    #[instrument(skip(self))]
    pub async fn get_role(&self, role_id: i64) -> ServiceResult<RoleResponse> {
        let role = self
            .ctx
            .role_repo()
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Role"))?;

        Ok(RoleResponse::from(role))
    }

    /// Create a new role
    ///
    /// Names are unique case-insensitively across active and deactivated roles.
    #[instrument(skip(self, role), fields(name = %role.name))]
    pub async fn create_role(&self, role: NewRole) -> ServiceResult<RoleResponse> {
        if self.ctx.role_repo().name_exists(&role.name, None).await? {
            return Err(DomainError::RoleNameTaken.into());
        }

        let role = self.ctx.role_repo().create(&role).await?;

        info!(role_id = %role.id, name = %role.name, "Role created");

        Ok(RoleResponse::from(role))
    }

    /// Update a role's name and/or description
    #[instrument(skip(self, update))]
    pub async fn update_role(&self, role_id: i64, update: RoleUpdate) -> ServiceResult<RoleResponse> {
        let existing = self
            .ctx
            .role_repo()
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Role"))?;

        // Re-casing the current name is not a conflict
        if let Some(name) = update.name.as_deref() {
            if !existing.has_name(name) && self.ctx.role_repo().name_exists(name, Some(role_id)).await? {
                return Err(DomainError::RoleNameTaken.into());
            }
        }

        let changes = RoleChanges {
            name: update.name.unwrap_or(existing.name),
            description: update.description.unwrap_or(existing.description),
        };

        let role = self.ctx.role_repo().update(role_id, &changes).await?;

        info!(role_id = %role_id, "Role updated");

        Ok(RoleResponse::from(role))
    }

    /// Soft-delete a role. Users keep their reference to it.
    #[instrument(skip(self))]
    pub async fn deactivate_role(&self, role_id: i64) -> ServiceResult<RoleResponse> {
        if role_id == DEFAULT_ROLE_ID {
            return Err(DomainError::CannotDeactivateDefaultRole.into());
        }

        let existing = self
            .ctx
            .role_repo()
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Role"))?;

        if !existing.is_active {
            return Err(DomainError::RoleAlreadyDeactivated.into());
        }

        let role = self.ctx.role_repo().deactivate(role_id).await?;

        info!(role_id = %role_id, name = %role.name, "Role deactivated");

        Ok(RoleResponse::from(role))
    }
}
