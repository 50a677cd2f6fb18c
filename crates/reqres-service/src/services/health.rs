//! Health service
//!
//! Liveness and readiness probes.

use chrono::Utc;
use tracing::{instrument, warn};

use crate::dto::{HealthChecks, HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    /// Create a new HealthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Liveness: the process is up
    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Readiness: the database answers a trivial query
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let database = match sqlx::query("SELECT 1").execute(self.ctx.pool()).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Database readiness check failed");
                false
            }
        };

        ReadinessResponse {
            status: if database { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks { database },
        }
    }
}
