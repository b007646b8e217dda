//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use roster_core::entities::{Member, NewMember};
use roster_core::traits::{MemberRepository, RepoResult};

use crate::models::MemberModel;

use super::error::map_db_error;

const MEMBER_COLUMNS: &str = "id, full_name, nim, age, job, location, instagram_account, \
     link_to_instagram, quote, image_path, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members WHERE deleted_at IS NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Member>> {
        let sql = format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE deleted_at IS NULL ORDER BY id"
        );
        let results = sqlx::query_as::<_, MemberModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Member::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        let sql = format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1 AND deleted_at IS NULL"
        );
        let result = sqlx::query_as::<_, MemberModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self, members), fields(count = members.len()))]
    async fn insert_batch(&self, members: &[NewMember]) -> RepoResult<u64> {
        if members.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO members (full_name, nim, age, job, location, instagram_account, \
             link_to_instagram, quote, image_path) ",
        );
        builder.push_values(members, |mut row, member| {
            row.push_bind(member.full_name.as_str())
                .push_bind(member.nim.as_str())
                .push_bind(member.age)
                .push_bind(member.job.as_str())
                .push_bind(member.location.as_str())
                .push_bind(member.instagram_account.as_str())
                .push_bind(member.link_to_instagram.as_str())
                .push_bind(member.quote.as_str())
                .push_bind(member.image_path.as_str());
        });

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
