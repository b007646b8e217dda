//! In-memory MemberRepository for tests that run without PostgreSQL
//!
//! Mirrors the PostgreSQL semantics that callers rely on: ids are assigned
//! sequentially from 1, soft-deleted rows are invisible, and a batch insert
//! is all-or-nothing.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use roster_core::entities::{Member, NewMember};
use roster_core::error::DomainError;
use roster_core::traits::{MemberRepository, RepoResult};

#[derive(Default)]
pub struct InMemoryMemberRepository {
    rows: RwLock<Vec<Member>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every read return a database error
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every write return a database error
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Soft-delete a row, the way no production path ever does
    pub async fn soft_delete(&self, id: i64, at: DateTime<Utc>) {
        if let Some(row) = self.rows.write().await.iter_mut().find(|m| m.id == id) {
            row.deleted_at = Some(at);
        }
    }

    fn check(&self, flag: &AtomicBool) -> RepoResult<()> {
        if flag.load(Ordering::SeqCst) {
            Err(DomainError::DatabaseError("simulated storage failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn count(&self) -> RepoResult<i64> {
        self.check(&self.fail_reads)?;
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|m| !m.is_deleted()).count() as i64)
    }

    async fn find_all(&self) -> RepoResult<Vec<Member>> {
        self.check(&self.fail_reads)?;
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|m| !m.is_deleted()).cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        self.check(&self.fail_reads)?;
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|m| m.id == id && !m.is_deleted()).cloned())
    }

    async fn insert_batch(&self, members: &[NewMember]) -> RepoResult<u64> {
        self.check(&self.fail_writes)?;
        let mut rows = self.rows.write().await;
        let now = Utc::now();
        // Like BIGSERIAL, ids keep increasing even past soft-deleted rows
        let mut next_id = rows.last().map_or(1, |m| m.id + 1);
        for member in members {
            rows.push(member.clone().into_member(next_id, now));
            next_id += 1;
        }
        Ok(members.len() as u64)
    }
}
