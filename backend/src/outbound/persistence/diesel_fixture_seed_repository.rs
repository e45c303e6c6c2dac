//! PostgreSQL-backed fixture seeding adapter.
//!
//! Users and articles are inserted in one transaction. The transaction first
//! counts users; a non-empty table means the store is already seeded and
//! nothing is written.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::FixtureContent;
use crate::domain::ports::{FixtureSeedError, FixtureSeedRepository, SeedingResult};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewArticleRow, NewUserRow};
use super::pool::DbPool;
use super::schema::{articles, users};

/// Diesel-backed implementation of the `FixtureSeedRepository` port.
#[derive(Clone)]
pub struct DieselFixtureSeedRepository {
    pool: DbPool,
}

impl DieselFixtureSeedRepository {
    /// Create a new seeding repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn user_rows(content: &FixtureContent) -> Vec<NewUserRow<'_>> {
    content
        .users()
        .iter()
        .map(|username| NewUserRow {
            username: username.as_str(),
        })
        .collect()
}

fn article_rows(content: &FixtureContent) -> Vec<NewArticleRow<'_>> {
    content
        .articles()
        .iter()
        .map(|draft| NewArticleRow {
            title: draft.title(),
            content: draft.content(),
            is_member_only: draft.is_member_only(),
        })
        .collect()
}

#[async_trait]
impl FixtureSeedRepository for DieselFixtureSeedRepository {
    async fn seed(&self, content: &FixtureContent) -> Result<SeedingResult, FixtureSeedError> {
        let user_rows = user_rows(content);
        let article_rows = article_rows(content);
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, FixtureSeedError::connection))?;

        conn.transaction(|conn| {
            async move {
                let existing: i64 = users::table.count().get_result(conn).await?;
                if existing > 0 {
                    return Ok(SeedingResult::AlreadySeeded);
                }

                if !user_rows.is_empty() {
                    diesel::insert_into(users::table)
                        .values(&user_rows)
                        .execute(conn)
                        .await?;
                }
                if !article_rows.is_empty() {
                    diesel::insert_into(articles::table)
                        .values(&article_rows)
                        .execute(conn)
                        .await?;
                }

                Ok(SeedingResult::Applied)
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| map_diesel_error(err, FixtureSeedError::write, FixtureSeedError::connection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArticleDraft, Username};
    use rstest::rstest;

    #[rstest]
    fn rows_follow_fixture_order() {
        let content = FixtureContent::new(
            vec![
                Username::new("alice").expect("valid"),
                Username::new("bob").expect("valid"),
            ],
            vec![ArticleDraft::try_new("Members Article", "Only members.", true).expect("valid")],
        );

        let users = user_rows(&content);
        let articles = article_rows(&content);

        assert_eq!(
            users.iter().map(|row| row.username).collect::<Vec<_>>(),
            vec!["alice", "bob"]
        );
        assert_eq!(articles.len(), 1);
        assert!(articles[0].is_member_only);
    }

    #[rstest]
    fn query_failures_map_to_write_errors() {
        let err = map_diesel_error(
            diesel::result::Error::NotFound,
            FixtureSeedError::write,
            FixtureSeedError::connection,
        );
        assert!(matches!(err, FixtureSeedError::Write { .. }));
    }
}
