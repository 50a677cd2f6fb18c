//! User entity <-> model mapper

use reqres_core::entities::{RoleChange, RoleSummary, User};

use crate::models::{RoleChangeModel, UserWithRoleModel};

/// Convert a joined row to a User entity. The role is attached only when the join found a row.
impl From<UserWithRoleModel> for User {
    fn from(model: UserWithRoleModel) -> Self {
        let role = match (model.role_id, model.role_name) {
            (Some(id), Some(name)) => Some(RoleSummary {
                id,
                name,
                description: model.role_description,
                is_active: model.role_is_active.unwrap_or(false),
            }),
            _ => None,
        };

        User {
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            avatar: model.avatar,
            job: model.job,
            role_id: model.role_id,
            role,
        }
    }
}

impl From<RoleChangeModel> for RoleChange {
    fn from(model: RoleChangeModel) -> Self {
        RoleChange {
            user_id: model.user_id,
            old_role_id: model.old_role_id,
            new_role_id: model.new_role_id,
            changed_at: model.changed_at,
        }
    }
}
