//! SQLite implementation of RoleRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use reqres_core::entities::{NewRole, Role, RoleChanges};
use reqres_core::error::DomainError;
use reqres_core::traits::{RepoResult, RoleRepository};

use crate::models::RoleModel;

use super::error::{map_db_error, map_unique_violation, role_not_found};

/// SQLite implementation of RoleRepository
#[derive(Clone)]
pub struct SqliteRoleRepository {
    pool: SqlitePool,
}

impl SqliteRoleRepository {
    /// Create a new SqliteRoleRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: i64) -> RepoResult<Role> {
        self.find_by_id(id).await?.ok_or_else(|| role_not_found(id))
    }
}

#[async_trait]
impl RoleRepository for SqliteRoleRepository {
    #[instrument(skip(self))]
    async fn list(&self, include_inactive: bool) -> RepoResult<Vec<Role>> {
        let results = sqlx::query_as::<_, RoleModel>(
            r#"
            SELECT id, name, description, is_active, created_at
            FROM roles
            WHERE ?1 OR is_active = 1
            ORDER BY name COLLATE BINARY
            "#,
        )
        .bind(include_inactive)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Role::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Role>> {
        let result = sqlx::query_as::<_, RoleModel>(
            r#"
            SELECT id, name, description, is_active, created_at
            FROM roles
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Role::from))
    }

    #[instrument(skip(self))]
    async fn find_active(&self, id: i64) -> RepoResult<Option<Role>> {
        let result = sqlx::query_as::<_, RoleModel>(
            r#"
            SELECT id, name, description, is_active, created_at
            FROM roles
            WHERE id = ? AND is_active = 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Role::from))
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        let exists: i64 = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM roles
                WHERE name = ?1 COLLATE NOCASE AND (?2 IS NULL OR id != ?2)
            )
            "#,
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists == 1)
    }

    #[instrument(skip(self))]
    async fn create(&self, role: &NewRole) -> RepoResult<Role> {
        let result = sqlx::query(
            r#"
            INSERT INTO roles (name, description, is_active, created_at)
            VALUES (?, ?, 1, ?)
            "#,
        )
        .bind(&role.name)
        .bind(&role.description)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RoleNameTaken))?;

        self.fetch(result.last_insert_rowid()).await
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, changes: &RoleChanges) -> RepoResult<Role> {
        let result = sqlx::query(
            r#"
            UPDATE roles
            SET name = ?, description = ?
            WHERE id = ?
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RoleNameTaken))?;

        if result.rows_affected() == 0 {
            return Err(role_not_found(id));
        }

        self.fetch(id).await
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: i64) -> RepoResult<Role> {
        let result = sqlx::query("UPDATE roles SET is_active = 0 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(role_not_found(id));
        }

        self.fetch(id).await
    }
}
