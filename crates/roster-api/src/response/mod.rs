//! Response envelope and error handling for API endpoints
//!
//! Successful bodies are `{"data": ...}` and failures are `{"error": "..."}`.
//! Error messages are generic; causes are only logged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    /// No live member with the requested id, or the id did not parse
    #[error("Member not found")]
    MemberNotFound,

    /// Storage failed while looking up a single member
    #[error("Member not found")]
    MemberLookup(#[source] DomainError),

    #[error("Failed to fetch members")]
    FetchMembers(#[source] DomainError),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MemberNotFound | Self::MemberLookup(_) => StatusCode::NOT_FOUND,
            Self::FetchMembers(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Success envelope
#[derive(Debug, Serialize)]
pub struct DataBody<T> {
    pub data: T,
}

/// Error envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::FetchMembers(cause) => {
                error!(error = %cause, code = cause.code(), "Failed to fetch members");
            }
            Self::MemberLookup(cause) => {
                warn!(error = %cause, code = cause.code(), "Member lookup failed");
            }
            Self::MemberNotFound => {}
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper for successful JSON responses, rendered inside the data envelope
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        Json(DataBody { data: self.0 }).into_response()
    }
}
