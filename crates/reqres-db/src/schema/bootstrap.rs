//! Idempotent schema initialization
//!
//! Safe to run on every start. Once the schema is in place a run only performs
//! existence and emptiness checks.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{error, info, instrument};

use reqres_core::error::DomainError;
use reqres_core::traits::RepoResult;
use reqres_core::value_objects::avatar_url;

use super::seed::{SEED_ROLES, SEED_USERS};
use crate::repositories::error::map_db_error;

/// What a bootstrap run changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub roles_seeded: usize,
    pub users_seeded: usize,
    pub role_column_added: bool,
}

impl BootstrapReport {
    /// True when the run found everything in place and wrote nothing
    pub fn is_noop(&self) -> bool {
        self.roles_seeded == 0 && self.users_seeded == 0 && !self.role_column_added
    }
}

/// Create tables, add the `users.role_id` column to legacy databases, and seed empty tables.
///
/// Table and column errors abort the run. A failing seed row is logged and skipped.
#[instrument(skip(pool))]
pub async fn initialize(pool: &SqlitePool) -> RepoResult<BootstrapReport> {
    let mut report = BootstrapReport::default();

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS roles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE COLLATE NOCASE,
            description TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| schema_error("create roles table", e))?;

    if count_rows(pool, "roles").await? == 0 {
        report.roles_seeded = seed_roles(pool).await;
    }

    let users_existed = table_exists(pool, "users").await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT,
            first_name TEXT,
            last_name TEXT,
            avatar TEXT,
            job TEXT,
            role_id INTEGER DEFAULT 1 REFERENCES roles(id)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| schema_error("create users table", e))?;

    if users_existed && !table_has_column(pool, "users", "role_id").await? {
        // SQLite rejects REFERENCES with a non-null default on ADD COLUMN while foreign keys are on
        sqlx::query("ALTER TABLE users ADD COLUMN role_id INTEGER DEFAULT 1")
            .execute(pool)
            .await
            .map_err(|e| schema_error("add users.role_id column", e))?;
        report.role_column_added = true;
        info!("Added role_id column to existing users table");
    }

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_role_changes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            old_role_id INTEGER,
            new_role_id INTEGER NOT NULL,
            changed_at DATETIME NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| schema_error("create user_role_changes table", e))?;

    if count_rows(pool, "users").await? == 0 {
        report.users_seeded = seed_users(pool).await;
    }

    info!(
        roles_seeded = report.roles_seeded,
        users_seeded = report.users_seeded,
        role_column_added = report.role_column_added,
        "Database schema ready"
    );

    Ok(report)
}

async fn seed_roles(pool: &SqlitePool) -> usize {
    let mut seeded = 0;
    for role in &SEED_ROLES {
        let result = sqlx::query(
            "INSERT INTO roles (id, name, description, is_active, created_at) VALUES (?, ?, ?, 1, ?)",
        )
        .bind(role.id)
        .bind(role.name)
        .bind(role.description)
        .bind(Utc::now())
        .execute(pool)
        .await;

        match result {
            Ok(_) => seeded += 1,
            Err(e) => error!(role = role.name, error = %e, "Failed to seed role"),
        }
    }
    seeded
}

async fn seed_users(pool: &SqlitePool) -> usize {
    let mut seeded = 0;
    for user in &SEED_USERS {
        let result = sqlx::query(
            "INSERT INTO users (email, first_name, last_name, avatar, role_id) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user.email)
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(avatar_url(user.avatar_index))
        .bind(user.role_id)
        .execute(pool)
        .await;

        match result {
            Ok(_) => seeded += 1,
            Err(e) => error!(email = user.email, error = %e, "Failed to seed user"),
        }
    }
    seeded
}

async fn count_rows(pool: &SqlitePool, table: &'static str) -> RepoResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar::<_, i64>(&sql)
        .fetch_one(pool)
        .await
        .map_err(map_db_error)
}

async fn table_exists(pool: &SqlitePool, table: &str) -> RepoResult<bool> {
    let exists: i64 = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)",
    )
    .bind(table)
    .fetch_one(pool)
    .await
    .map_err(map_db_error)?;
    Ok(exists == 1)
}

async fn table_has_column(pool: &SqlitePool, table: &str, column: &str) -> RepoResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM pragma_table_info(?) WHERE name = ?")
            .bind(table)
            .bind(column)
            .fetch_one(pool)
            .await
            .map_err(map_db_error)?;
    Ok(count > 0)
}

fn schema_error(step: &str, e: sqlx::Error) -> DomainError {
    error!(step, error = %e, "Schema initialization failed");
    DomainError::DatabaseError(format!("{step}: {e}"))
}
