//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::response::ApiError;

/// Extract a member id from the `:id` path segment
///
/// Anything that does not decode to an `i64` is rejected as an unknown
/// member, including segments that percent-decode to invalid UTF-8.
#[derive(Debug, Clone, Copy)]
pub struct MemberIdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for MemberIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MemberNotFound)?;

        raw.parse().map(MemberIdPath).map_err(|_| ApiError::MemberNotFound)
    }
}
