//! Response shapes used by the end-to-end tests

use serde::Deserialize;

/// `{"data": ...}` envelope
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// `{"error": "..."}` envelope
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

/// Liveness response
#[derive(Debug, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

/// Member as rendered by the API
#[derive(Debug, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub full_name: String,
    pub nim: String,
    pub age: i32,
    pub job: String,
    pub location: String,
    pub instagram_account: String,
    pub link_to_instagram: String,
    pub quote: String,
    pub image_path: String,
    pub created_at: String,
    pub updated_at: String,
}

impl MemberResponse {
    /// Every string attribute, for non-emptiness checks
    pub fn string_fields(&self) -> [&str; 8] {
        [
            &self.full_name,
            &self.nim,
            &self.job,
            &self.location,
            &self.instagram_account,
            &self.link_to_instagram,
            &self.quote,
            &self.image_path,
        ]
    }
}
