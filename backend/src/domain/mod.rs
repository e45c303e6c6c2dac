//! Domain primitives, ports and services.
//!
//! Purpose: define the strongly typed entities of the article gate (users,
//! articles, the member-only projection), the error taxonomy shared by every
//! adapter, and the services that implement the driving ports. Nothing here
//! depends on actix or Diesel.
//!
//! Public surface:
//! - `Error` / `ErrorCode` — transport-agnostic error payload.
//! - `User`, `UserId`, `Username` — login identities.
//! - `Article`, `ArticleDraft`, `ArticleId`, `MemberArticle` — content.
//! - `SessionService`, `MemberArticlesService` — port implementations.
//! - `FixtureContent` — demo content for empty stores.

pub mod article;
pub mod error;
pub mod fixtures;
pub mod member_articles_service;
pub mod ports;
pub mod session_service;
pub mod trace_id;
pub mod user;

pub use self::article::{
    Article, ArticleDraft, ArticleId, ArticleValidationError, MemberArticle, TITLE_MAX,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::fixtures::FixtureContent;
pub use self::member_articles_service::{ARTICLE_NOT_FOUND_MESSAGE, MemberArticlesService};
pub use self::session_service::{SessionService, USER_NOT_FOUND_MESSAGE};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{USERNAME_MAX, User, UserId, UserValidationError, Username};
