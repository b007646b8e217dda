//! Response DTOs
//!
//! Wire shapes for the JSON bodies, decoupled from the domain entities.

use chrono::{DateTime, Utc};
use roster_core::Member;
use serde::Serialize;

/// Public view of a member
#[derive(Debug, Clone, Serialize)]
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            full_name: member.full_name,
            nim: member.nim,
            age: member.age,
            job: member.job,
            location: member.location,
            instagram_account: member.instagram_account,
            link_to_instagram: member.link_to_instagram,
            quote: member.quote,
            image_path: member.image_path,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}

impl PingResponse {
    pub fn pong() -> Self {
        Self { message: "pong" }
    }
}
