//! Member entity - a single team roster record

use chrono::{DateTime, Utc};
use validator::Validate;

/// Roster member as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: i64,
    pub full_name: String,
    /// Student/member identifier (NIM)
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
    /// Soft-delete marker. Nothing sets it; live queries filter on it.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Member {
    /// Check if the record has been soft-deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Insert payload for a member. The id and timestamps are assigned by storage.
///
/// Column limits mirror the `members` table so a batch can be rejected
/// before it reaches the database.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewMember {
    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: String,

    #[validate(length(min = 1, max = 20, message = "NIM must be 1-20 characters"))]
    pub nim: String,

    #[validate(range(min = 1, message = "Age must be positive"))]
    pub age: i32,

    #[validate(length(min = 1, max = 100, message = "Job must be 1-100 characters"))]
    pub job: String,

    #[validate(length(min = 1, max = 100, message = "Location must be 1-100 characters"))]
    pub location: String,

    #[validate(length(min = 1, max = 100, message = "Instagram account must be 1-100 characters"))]
    pub instagram_account: String,

    #[validate(length(min = 1, max = 255, message = "Instagram link must be 1-255 characters"))]
    pub link_to_instagram: String,

    #[validate(length(min = 1, max = 255, message = "Quote must be 1-255 characters"))]
    pub quote: String,

    #[validate(length(min = 1, max = 255, message = "Image path must be 1-255 characters"))]
    pub image_path: String,
}

impl NewMember {
    /// Materialize the payload as a stored member with the given id
    pub fn into_member(self, id: i64, now: DateTime<Utc>) -> Member {
        Member {
            id,
            full_name: self.full_name,
            nim: self.nim,
            age: self.age,
            job: self.job,
            location: self.location,
            instagram_account: self.instagram_account,
            link_to_instagram: self.link_to_instagram,
            quote: self.quote,
            image_path: self.image_path,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}
