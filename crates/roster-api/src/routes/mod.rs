//! Route definitions

use std::path::Path;

use axum::{response::Redirect, routing::get, Router};
use tower_http::services::ServeDir;

use crate::handlers::{health, members};
use crate::state::AppState;

/// Create the main router: liveness, the members API and static assets
pub fn create_router(assets_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/ping", get(health::ping))
        .nest("/api", api_routes())
        .nest_service("/assets", ServeDir::new(assets_dir))
}

/// Member routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(members::list_members))
        .route("/members/", get(|| async { Redirect::permanent("/api/members") }))
        .route("/members/:id", get(members::get_member))
}
