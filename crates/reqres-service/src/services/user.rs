//! User service
//!
//! Paginated listing, creation with role checks, partial updates and removal.

use chrono::Utc;
use reqres_core::entities::{NewUser, RoleChange, UserChanges};
use reqres_core::value_objects::{random_avatar, PersonName};
use reqres_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{
    messages, CreatedUserResponse, RequestedRole, UpdatedUserResponse, UserDraft, UserListFilter,
    UserListResponse, UserResponse, UserUpdate,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List one page of users, optionally restricted to a role
    #[instrument(skip(self))]
    pub async fn list_users(&self, filter: UserListFilter) -> ServiceResult<UserListResponse> {
        let total = self.ctx.user_repo().count(filter.role_id).await?;
        let users = self.ctx.user_repo().list(filter.role_id, filter.page).await?;

        Ok(UserListResponse {
            page: filter.page.page,
            per_page: filter.page.per_page,
            total,
            total_pages: filter.page.total_pages(total),
            data: users.into_iter().map(UserResponse::from).collect(),
        })
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        Ok(UserResponse::from(user))
    }

    /// Create a user. The response echoes the submitted name and job.
    #[instrument(skip(self, draft), fields(role_id = draft.role_id))]
    pub async fn create_user(&self, draft: UserDraft) -> ServiceResult<CreatedUserResponse> {
        self.require_active_role(draft.role_id).await?;

        let name = PersonName::parse(&draft.name)
            .ok_or_else(|| ServiceError::validation(messages::NAME_AND_JOB_REQUIRED))?;
        let user = NewUser::from_name(&name, draft.job.as_str(), draft.role_id, random_avatar());

        let user_id = self.ctx.user_repo().create(&user).await?;

        info!(user_id = %user_id, role_id = %draft.role_id, "User created");

        Ok(CreatedUserResponse {
            name: draft.name,
            job: draft.job,
            id: user_id,
            created_at: Utc::now(),
        })
    }

    /// Apply a partial update. Fields left out of the request echo as empty strings.
    #[instrument(skip(self, update))]
    pub async fn update_user(&self, user_id: i64, update: UserUpdate) -> ServiceResult<UpdatedUserResponse> {
        let existing = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        let role_id = match update.role {
            None => None,
            Some(RequestedRole::Malformed) => return Err(DomainError::InvalidRoleAssignment.into()),
            Some(RequestedRole::Id(role_id)) => {
                self.require_active_role(role_id).await?;
                Some(role_id)
            }
        };

        let changes = UserChanges {
            name: update.name.as_deref().and_then(PersonName::parse),
            job: update.job.clone(),
            role_id,
        };

        if !self.ctx.user_repo().update(user_id, &changes).await? {
            return Err(ServiceError::not_found("User"));
        }

        info!(user_id = %user_id, "User updated");

        if let Some(new_role_id) = role_id {
            if existing.role_id != Some(new_role_id) {
                self.record_role_change(RoleChange::new(user_id, existing.role_id, new_role_id))
                    .await;
            }
        }

        Ok(UpdatedUserResponse {
            name: update.name.unwrap_or_default(),
            job: update.job.unwrap_or_default(),
            updated_at: Utc::now(),
        })
    }

    /// Hard delete. Deleting a missing user is not an error.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: i64) -> ServiceResult<()> {
        let removed = self.ctx.user_repo().delete(user_id).await?;

        if removed > 0 {
            info!(user_id = %user_id, "User deleted");
        }

        Ok(())
    }

    async fn require_active_role(&self, role_id: i64) -> ServiceResult<()> {
        match self.ctx.role_repo().find_active(role_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::InvalidRoleAssignment.into()),
        }
    }

    /// Persist a role reassignment. Failures never fail the update itself.
    async fn record_role_change(&self, change: RoleChange) {
        info!(
            target: "audit",
            user_id = %change.user_id,
            old_role_id = ?change.old_role_id,
            new_role_id = %change.new_role_id,
            changed_at = %change.changed_at,
            "User role changed"
        );

        if let Err(e) = self.ctx.user_repo().record_role_change(&change).await {
            warn!(user_id = %change.user_id, error = %e, "Failed to record role change");
        }
    }
}
