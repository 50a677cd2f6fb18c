//! SQLite implementation of UserRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use reqres_core::entities::{NewUser, RoleChange, User, UserChanges};
use reqres_core::traits::{RepoResult, UserRepository};
use reqres_core::value_objects::PageRequest;

use crate::models::{RoleChangeModel, UserWithRoleModel};

use super::error::map_db_error;

const USER_WITH_ROLE_COLUMNS: &str = r#"
    SELECT u.id, u.email, u.first_name, u.last_name, u.avatar, u.job, u.role_id,
           r.name AS role_name, r.description AS role_description, r.is_active AS role_is_active
    FROM users u
    LEFT JOIN roles r ON u.role_id = r.id
"#;

/// SQLite implementation of UserRepository
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new SqliteUserRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    #[instrument(skip(self))]
    async fn count(&self, role_filter: Option<i64>) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE ?1 IS NULL OR role_id = ?1")
            .bind(role_filter)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list(&self, role_filter: Option<i64>, page: PageRequest) -> RepoResult<Vec<User>> {
        let sql = format!(
            "{USER_WITH_ROLE_COLUMNS} WHERE ?1 IS NULL OR u.role_id = ?1 ORDER BY u.id LIMIT ?2 OFFSET ?3"
        );

        let results = sqlx::query_as::<_, UserWithRoleModel>(&sql)
            .bind(role_filter)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let sql = format!("{USER_WITH_ROLE_COLUMNS} WHERE u.id = ?");

        let result = sqlx::query_as::<_, UserWithRoleModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, user: &NewUser) -> RepoResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (email, first_name, last_name, avatar, job, role_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.avatar)
        .bind(&user.job)
        .bind(user.role_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, changes: &UserChanges) -> RepoResult<bool> {
        let (first_name, last_name) = match &changes.name {
            Some(name) => (Some(name.first.as_str()), Some(name.last.as_str())),
            None => (None, None),
        };

        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = COALESCE(?, first_name),
                last_name = COALESCE(?, last_name),
                job = COALESCE(?, job),
                role_id = COALESCE(?, role_id)
            WHERE id = ?
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(changes.job.as_deref())
        .bind(changes.role_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn record_role_change(&self, change: &RoleChange) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO user_role_changes (user_id, old_role_id, new_role_id, changed_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(change.user_id)
        .bind(change.old_role_id)
        .bind(change.new_role_id)
        .bind(change.changed_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn role_changes(&self, user_id: i64) -> RepoResult<Vec<RoleChange>> {
        let results = sqlx::query_as::<_, RoleChangeModel>(
            r#"
            SELECT id, user_id, old_role_id, new_role_id, changed_at
            FROM user_role_changes
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(RoleChange::from).collect())
    }
}
