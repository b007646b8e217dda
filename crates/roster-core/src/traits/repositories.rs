//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Member, NewMember};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Read access to the roster plus the one bulk write used by seeding.
///
/// Every method ignores soft-deleted rows.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Count live members
    async fn count(&self) -> RepoResult<i64>;

    /// List live members ordered by id
    async fn find_all(&self) -> RepoResult<Vec<Member>>;

    /// Find a live member by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>>;

    /// Insert all members in a single statement. Either every row is
    /// written or none are. Returns the number of rows inserted.
    async fn insert_batch(&self, members: &[NewMember]) -> RepoResult<u64>;
}
