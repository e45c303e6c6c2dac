//! Member-only article reads.
//!
//! A missing article and a public article produce the same `NotFound`
//! error so callers cannot probe which public ids exist.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::ports::{ArticlePersistenceError, ArticleRepository, MemberArticlesQuery};
use super::{ArticleId, Error, MemberArticle, User};

/// Message returned for missing or non-member articles.
pub const ARTICLE_NOT_FOUND_MESSAGE: &str = "Article not found or not member-only";

/// Implements [`MemberArticlesQuery`] on top of an article repository.
#[derive(Clone)]
pub struct MemberArticlesService {
    articles: Arc<dyn ArticleRepository>,
}

impl MemberArticlesService {
    /// Create a service reading from `articles`.
    pub fn new(articles: Arc<dyn ArticleRepository>) -> Self {
        Self { articles }
    }
}

fn map_article_persistence_error(error: ArticlePersistenceError) -> Error {
    match error {
        ArticlePersistenceError::Connection { message } => Error::service_unavailable(message),
        ArticlePersistenceError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl MemberArticlesQuery for MemberArticlesService {
    async fn list(&self, viewer: &User) -> Result<Vec<MemberArticle>, Error> {
        let articles = self
            .articles
            .find_by_membership(true)
            .await
            .map_err(map_article_persistence_error)?;
        debug!(user_id = %viewer.id(), count = articles.len(), "listing member articles");
        // Filter again so an adapter returning public rows cannot leak them.
        Ok(articles
            .into_iter()
            .filter_map(MemberArticle::from_member_only)
            .collect())
    }

    async fn fetch(&self, viewer: &User, id: ArticleId) -> Result<MemberArticle, Error> {
        let article = self
            .articles
            .find_by_id(&id)
            .await
            .map_err(map_article_persistence_error)?;

        article
            .and_then(MemberArticle::from_member_only)
            .ok_or_else(|| {
                debug!(user_id = %viewer.id(), article_id = %id, "member article unavailable");
                Error::not_found(ARTICLE_NOT_FOUND_MESSAGE)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Article, ErrorCode};
    use crate::domain::ports::MockArticleRepository;
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn viewer() -> User {
        User::try_from_parts(1, "alice").expect("valid user")
    }

    fn public_article() -> Article {
        Article::try_from_parts(1, "Public Article", "Everyone can read this.", false)
            .expect("valid article")
    }

    fn member_article() -> Article {
        Article::try_from_parts(2, "Members Article", "Only members can read this.", true)
            .expect("valid article")
    }

    fn article_id(raw: i32) -> ArticleId {
        ArticleId::new(raw).expect("valid id")
    }

    fn service(repository: MockArticleRepository) -> MemberArticlesService {
        MemberArticlesService::new(Arc::new(repository))
    }

    #[rstest]
    #[tokio::test]
    async fn list_queries_member_only_flag(viewer: User) {
        let mut repository = MockArticleRepository::new();
        repository
            .expect_find_by_membership()
            .with(eq(true))
            .times(1)
            .return_once(|_| Ok(vec![member_article()]));

        let listed = service(repository).list(&viewer).await.expect("list succeeds");

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Members Article");
        assert_eq!(listed[0].content, "Only members can read this.");
    }

    #[rstest]
    #[tokio::test]
    async fn list_drops_public_rows_from_misbehaving_adapters(viewer: User) {
        let mut repository = MockArticleRepository::new();
        repository
            .expect_find_by_membership()
            .return_once(|_| Ok(vec![public_article(), member_article()]));

        let listed = service(repository).list(&viewer).await.expect("list succeeds");

        assert_eq!(listed.iter().map(|a| a.id.get()).collect::<Vec<_>>(), vec![2]);
    }

    #[rstest]
    #[tokio::test]
    async fn fetch_returns_member_article(viewer: User) {
        let mut repository = MockArticleRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(article_id(2)))
            .return_once(|_| Ok(Some(member_article())));

        let article = service(repository)
            .fetch(&viewer, article_id(2))
            .await
            .expect("member article is visible");

        assert_eq!(article.title, "Members Article");
    }

    #[rstest]
    #[case::public(Some(public_article()))]
    #[case::missing(None)]
    #[tokio::test]
    async fn fetch_collapses_public_and_missing_into_not_found(
        viewer: User,
        #[case] stored: Option<Article>,
    ) {
        let mut repository = MockArticleRepository::new();
        repository.expect_find_by_id().return_once(move |_| Ok(stored));

        let err = service(repository)
            .fetch(&viewer, article_id(1))
            .await
            .expect_err("non-member article must be hidden");

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), ARTICLE_NOT_FOUND_MESSAGE);
    }

    #[rstest]
    #[case(ArticlePersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(ArticlePersistenceError::query("bad row"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn fetch_maps_repository_failures(
        viewer: User,
        #[case] failure: ArticlePersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let mut repository = MockArticleRepository::new();
        repository.expect_find_by_id().return_once(move |_| Err(failure));

        let err = service(repository)
            .fetch(&viewer, article_id(2))
            .await
            .expect_err("repository failure must surface");

        assert_eq!(err.code(), expected);
    }
}
