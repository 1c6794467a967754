//! Caller identity extraction.
//!
//! Authentication itself is delegated to the deployment's auth layer (a
//! reverse proxy or gateway); the contract with this server is a single
//! trusted `x-user-id` header. Protected handlers take a [`CurrentUser`]
//! argument and get a 401 for free when the header is absent.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use craneboard_core::client::USER_HEADER;

use crate::error::ApiError;

/// The authenticated user id for the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| CurrentUser(value.to_string()))
            .ok_or(ApiError::Unauthorized)
    }
}
