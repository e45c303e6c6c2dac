//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`LoginService`, `IdentityQuery`, `MemberArticlesQuery`) are
//! called by inbound adapters. Driven ports (`UserRepository`,
//! `ArticleRepository`, `FixtureSeedRepository`) are implemented by the
//! record store adapters under `crate::outbound`.

mod macros;
pub(crate) use macros::define_port_error;

mod article_repository;
mod fixture_seed_repository;
mod identity_query;
mod login_service;
mod member_articles_query;
mod user_repository;

#[cfg(test)]
pub use article_repository::MockArticleRepository;
pub use article_repository::{ArticlePersistenceError, ArticleRepository};
#[cfg(test)]
pub use fixture_seed_repository::MockFixtureSeedRepository;
pub use fixture_seed_repository::{FixtureSeedError, FixtureSeedRepository, SeedingResult};
#[cfg(test)]
pub use identity_query::MockIdentityQuery;
pub use identity_query::IdentityQuery;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use member_articles_query::MockMemberArticlesQuery;
pub use member_articles_query::MemberArticlesQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
