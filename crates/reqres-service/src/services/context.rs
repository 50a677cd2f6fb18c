//! Service context - dependency container for services
//!
//! Holds the database pool and the repositories services work through.

use std::sync::Arc;

use reqres_core::traits::{RoleRepository, UserRepository};
use reqres_db::{SqlitePool, SqliteRoleRepository, SqliteUserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap: the pool and repositories are reference counted.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: SqlitePool,

    // Repositories
    role_repo: Arc<dyn RoleRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: SqlitePool,
        role_repo: Arc<dyn RoleRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            pool,
            role_repo,
            user_repo,
        }
    }

    /// Wire the SQLite repositories over a single pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(SqliteRoleRepository::new(pool.clone())),
            Arc::new(SqliteUserRepository::new(pool)),
        )
    }

    // === Database Pool ===

    /// Get the SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // === Repositories ===

    /// Get the role repository
    pub fn role_repo(&self) -> &dyn RoleRepository {
        self.role_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"SqlitePool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<SqlitePool>,
    role_repo: Option<Arc<dyn RoleRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: SqlitePool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn role_repo(mut self, repo: Arc<dyn RoleRepository>) -> Self {
        self.role_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// Repositories not set explicitly default to the SQLite implementations over the pool.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if no pool was provided
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?;

        let role_repo = self
            .role_repo
            .unwrap_or_else(|| Arc::new(SqliteRoleRepository::new(pool.clone())));
        let user_repo = self
            .user_repo
            .unwrap_or_else(|| Arc::new(SqliteUserRepository::new(pool.clone())));

        Ok(ServiceContext::new(pool, role_repo, user_repo))
    }
}
