//! Member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
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
    pub deleted_at: Option<DateTime<Utc>>,
}
