//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and only see domain ports, so they
//! can be exercised with mocks or the in-memory store.

use std::sync::Arc;

use crate::domain::ports::{
    ArticleRepository, IdentityQuery, LoginService, MemberArticlesQuery, UserRepository,
};
use crate::domain::{MemberArticlesService, SessionService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub identity: Arc<dyn IdentityQuery>,
    pub articles: Arc<dyn MemberArticlesQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        login: Arc<dyn LoginService>,
        identity: Arc<dyn IdentityQuery>,
        articles: Arc<dyn MemberArticlesQuery>,
    ) -> Self {
        Self {
            login,
            identity,
            articles,
        }
    }

    /// Wire the domain services over a pair of repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use article_gate::inbound::http::state::HttpState;
    /// use article_gate::outbound::memory::InMemoryRecordStore;
    ///
    /// let store = Arc::new(InMemoryRecordStore::with_fixtures().expect("fixtures"));
    /// let state = HttpState::from_repositories(store.clone(), store);
    /// # let _ = state;
    /// ```
    pub fn from_repositories(
        users: Arc<dyn UserRepository>,
        articles: Arc<dyn ArticleRepository>,
    ) -> Self {
        let sessions = Arc::new(SessionService::new(users));
        Self::new(
            sessions.clone(),
            sessions,
            Arc::new(MemberArticlesService::new(articles)),
        )
    }
}
