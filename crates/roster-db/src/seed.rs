//! One-time seeding of the canonical roster

use roster_core::entities::canonical_members;
use roster_core::traits::{MemberRepository, RepoResult};
use tracing::{info, instrument};
use validator::Validate;

/// What a seed run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already held live members; nothing was written
    Skipped { existing: i64 },
    /// The store was empty and this many members were inserted
    Inserted(u64),
}

/// Insert the canonical roster if, and only if, the store holds no live members.
///
/// The batch is written with a single statement, so a failure leaves the
/// store empty and a later run can try again.
#[instrument(skip(repo))]
pub async fn seed_members(repo: &dyn MemberRepository) -> RepoResult<SeedOutcome> {
    let existing = repo.count().await?;
    if existing > 0 {
        info!(existing, "Members already exist, skipping seed");
        return Ok(SeedOutcome::Skipped { existing });
    }

    let members = canonical_members();
    for member in &members {
        member.validate()?;
    }

    let inserted = repo.insert_batch(&members).await?;
    info!(inserted, "Seeded members");
    Ok(SeedOutcome::Inserted(inserted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryMemberRepository;

    #[tokio::test]
    async fn test_seed_empty_store_inserts_six() {
        let repo = InMemoryMemberRepository::new();

        let outcome = seed_members(&repo).await.unwrap();

        assert_eq!(outcome, SeedOutcome::Inserted(6));
        assert_eq!(repo.count().await.unwrap(), 6);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let repo = InMemoryMemberRepository::new();

        seed_members(&repo).await.unwrap();
        let second = seed_members(&repo).await.unwrap();
        let third = seed_members(&repo).await.unwrap();

        assert_eq!(second, SeedOutcome::Skipped { existing: 6 });
        assert_eq!(third, SeedOutcome::Skipped { existing: 6 });
        assert_eq!(repo.count().await.unwrap(), 6);
    }

    #[tokio::test]
    async fn test_seed_leaves_existing_rows_untouched() {
        let repo = InMemoryMemberRepository::new();
        let mut one = canonical_members();
        one.truncate(1);
        repo.insert_batch(&one).await.unwrap();

        let outcome = seed_members(&repo).await.unwrap();

        assert_eq!(outcome, SeedOutcome::Skipped { existing: 1 });
        let members = repo.find_all().await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].full_name, "Dheovan Winata Alvian");
    }

    #[tokio::test]
    async fn test_seeded_rows_are_fully_populated() {
        let repo = InMemoryMemberRepository::new();
        seed_members(&repo).await.unwrap();

        for member in repo.find_all().await.unwrap() {
            assert!(!member.full_name.is_empty());
            assert!(!member.nim.is_empty());
            assert!(member.age > 0);
            assert!(!member.job.is_empty());
            assert!(!member.location.is_empty());
            assert!(!member.instagram_account.is_empty());
            assert!(!member.link_to_instagram.is_empty());
            assert!(!member.quote.is_empty());
            assert!(!member.image_path.is_empty());
            assert!(!member.is_deleted());
        }
    }

    #[tokio::test]
    async fn test_seed_failure_is_reported_and_writes_nothing() {
        let repo = InMemoryMemberRepository::new();
        repo.fail_writes(true);

        let err = seed_members(&repo).await.unwrap_err();

        assert_eq!(err.code(), "DATABASE_ERROR");
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seed_count_failure_is_reported() {
        let repo = InMemoryMemberRepository::new();
        repo.fail_reads(true);

        assert!(seed_members(&repo).await.is_err());
    }
}
