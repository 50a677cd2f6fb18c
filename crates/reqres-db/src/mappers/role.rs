//! Role entity <-> model mapper

use reqres_core::entities::Role;

use crate::models::RoleModel;

/// Convert RoleModel to Role entity
impl From<RoleModel> for Role {
    fn from(model: RoleModel) -> Self {
        Role {
            id: model.id,
            name: model.name,
            description: model.description,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
