//! Validated JSON and query extractors
//!
//! Deserialize the request, then run its `ValidateRequest` rules. Handlers
//! receive the validated output rather than the raw request.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use reqres_service::ValidateRequest;
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Validated JSON extractor
///
/// Malformed JSON is rejected with `Invalid request body: ...`; shape errors
/// carry the message of the failed rule.
pub struct ValidatedJson<T: ValidateRequest>(pub T::Output);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateRequest,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(request) = Json::<T>::from_request(req, state).await?;
        Ok(ValidatedJson(request.validate()?))
    }
}

/// Validated query string extractor
pub struct ValidatedQuery<T: ValidateRequest>(pub T::Output);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateRequest,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ValidatedQuery(query.validate()?))
    }
}
