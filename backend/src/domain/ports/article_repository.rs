//! Port abstraction for article lookups against the record store.
use async_trait::async_trait;

use crate::domain::{Article, ArticleId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by article repository adapters.
    pub enum ArticlePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "article repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } => "article repository query failed: {message}",
    }
}

/// Read access to stored articles.
///
/// Adapters return results of [`ArticleRepository::find_by_membership`] in
/// ascending id order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Fetch an article by identifier, regardless of its membership flag.
    async fn find_by_id(&self, id: &ArticleId) -> Result<Option<Article>, ArticlePersistenceError>;

    /// Fetch every article whose membership flag equals `is_member_only`.
    async fn find_by_membership(
        &self,
        is_member_only: bool,
    ) -> Result<Vec<Article>, ArticlePersistenceError>;
}
