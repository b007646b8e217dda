//! Application state
//!
//! Holds the shared state for the Axum application: the member repository
//! and the directory served under `/assets`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use roster_core::MemberRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    members: Arc<dyn MemberRepository>,
    assets_dir: Arc<PathBuf>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(members: Arc<dyn MemberRepository>, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            members,
            assets_dir: Arc::new(assets_dir.into()),
        }
    }

    /// Get the member repository
    pub fn members(&self) -> &dyn MemberRepository {
        self.members.as_ref()
    }

    /// Get the static assets directory
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("members", &"MemberRepository")
            .field("assets_dir", &self.assets_dir)
            .finish()
    }
}
