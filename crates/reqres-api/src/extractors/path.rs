//! Path parameter extractors
//!
//! Path parameters arrive as raw strings; each extractor applies its own id rule.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use reqres_core::validation::parse_positive_id;
use reqres_service::messages;

use crate::response::ApiError;

async fn raw_id<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<String, ApiError> {
    let Path(raw) = Path::<String>::from_request_parts(parts, state)
        .await
        .map_err(|e| ApiError::invalid_path(e.body_text()))?;
    Ok(raw)
}

/// Role id from `/roles/:id`. Anything but a positive integer is rejected with 400.
#[derive(Debug, Clone, Copy)]
pub struct RoleId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for RoleId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_id(parts, state).await?;
        parse_positive_id(&raw)
            .map(RoleId)
            .ok_or_else(|| ApiError::invalid_path(messages::INVALID_ROLE_ID))
    }
}

/// User id from `/users/:id`.
///
/// `None` when the segment is not an integer; such an id matches no user.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub Option<i64>);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_id(parts, state).await?;
        Ok(UserId(raw.trim().parse::<i64>().ok()))
    }
}
