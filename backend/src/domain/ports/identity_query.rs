//! Driving port resolving a session's user id to a user record.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for identity resolution.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityQuery: Send + Sync {
    /// Return the user for `user_id`, or `None` when the user no longer
    /// exists. A dangling id is not an error.
    async fn resolve(&self, user_id: &UserId) -> Result<Option<User>, Error>;
}
