//! Driving port for login use-cases.
//!
//! Inbound adapters call it to exchange a username for a user without
//! knowing the backing record store. Login is by username only; no
//! credential is checked.

use async_trait::async_trait;

use crate::domain::{Error, User, Username};

/// Domain use-case port for establishing a session identity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Return the user whose username matches, or a `NotFound` error.
    async fn login(&self, username: &Username) -> Result<User, Error>;
}
