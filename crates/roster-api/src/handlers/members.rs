//! Member handlers
//!
//! Read-only endpoints over the roster.

use axum::extract::State;

use crate::dto::MemberResponse;
use crate::extractors::MemberIdPath;
use crate::response::{ApiError, ApiJson, ApiResult};
use crate::state::AppState;

/// List all members
///
/// GET /api/members
pub async fn list_members(State(state): State<AppState>) -> ApiResult<ApiJson<Vec<MemberResponse>>> {
    let members = state
        .members()
        .find_all()
        .await
        .map_err(ApiError::FetchMembers)?;

    Ok(ApiJson(members.into_iter().map(MemberResponse::from).collect()))
}

/// Get member by ID
///
/// GET /api/members/{id}
///
/// A malformed id is indistinguishable from an unknown one.
pub async fn get_member(
    State(state): State<AppState>,
    MemberIdPath(id): MemberIdPath,
) -> ApiResult<ApiJson<MemberResponse>> {
    let member = state
        .members()
        .find_by_id(id)
        .await
        .map_err(ApiError::MemberLookup)?
        .ok_or(ApiError::MemberNotFound)?;

    Ok(ApiJson(member.into()))
}
