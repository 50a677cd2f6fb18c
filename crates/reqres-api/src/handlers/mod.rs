//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod health;
pub mod roles;
pub mod users;

use crate::response::ApiError;

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
