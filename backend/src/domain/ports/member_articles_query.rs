//! Driving port for reading member-only articles.
//!
//! Callers must have resolved a session identity before using this port;
//! the authenticated user is passed in so the requirement shows up in the
//! signature.

use async_trait::async_trait;

use crate::domain::{ArticleId, Error, MemberArticle, User};

/// Domain use-case port for member-only article reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberArticlesQuery: Send + Sync {
    /// Every member-only article, ascending by id.
    async fn list(&self, viewer: &User) -> Result<Vec<MemberArticle>, Error>;

    /// One member-only article. Missing and public articles both yield the
    /// same `NotFound` error.
    async fn fetch(&self, viewer: &User, id: ArticleId) -> Result<MemberArticle, Error>;
}
