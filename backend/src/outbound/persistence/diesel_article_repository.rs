//! PostgreSQL-backed `ArticleRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ArticlePersistenceError, ArticleRepository};
use crate::domain::{Article, ArticleId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::ArticleRow;
use super::pool::DbPool;
use super::schema::articles;

/// Diesel-backed implementation of the `ArticleRepository` port.
///
/// Membership queries are ordered by primary key.
#[derive(Clone)]
pub struct DieselArticleRepository {
    pool: DbPool,
}

impl DieselArticleRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn diesel_error(error: diesel::result::Error) -> ArticlePersistenceError {
    map_diesel_error(
        error,
        ArticlePersistenceError::query,
        ArticlePersistenceError::connection,
    )
}

fn row_to_article(row: ArticleRow) -> Result<Article, ArticlePersistenceError> {
    let ArticleRow {
        id,
        title,
        content,
        is_member_only,
    } = row;
    Article::try_from_parts(id, title, content, is_member_only)
        .map_err(|err| ArticlePersistenceError::query(format!("invalid article row {id}: {err}")))
}

#[async_trait]
impl ArticleRepository for DieselArticleRepository {
    async fn find_by_id(&self, id: &ArticleId) -> Result<Option<Article>, ArticlePersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ArticlePersistenceError::connection))?;

        articles::table
            .filter(articles::id.eq(id.get()))
            .select(ArticleRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?
            .map(row_to_article)
            .transpose()
    }

    async fn find_by_membership(
        &self,
        is_member_only: bool,
    ) -> Result<Vec<Article>, ArticlePersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ArticlePersistenceError::connection))?;

        let rows: Vec<ArticleRow> = articles::table
            .filter(articles::is_member_only.eq(is_member_only))
            .order(articles::id.asc())
            .select(ArticleRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows.into_iter().map(row_to_article).collect()
    }
}
