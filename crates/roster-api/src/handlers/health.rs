//! Liveness check

use axum::Json;

use crate::dto::PingResponse;

/// GET /ping
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse::pong())
}
