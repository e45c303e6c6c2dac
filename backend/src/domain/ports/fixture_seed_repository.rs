//! Port for loading the demo fixture content into an empty record store.

use async_trait::async_trait;

use crate::domain::FixtureContent;

use super::define_port_error;

define_port_error! {
    /// Errors raised while writing fixture content.
    pub enum FixtureSeedError {
        /// Repository connection could not be established.
        Connection { message: String } => "fixture seed connection failed: {message}",
        /// Insert failed, for example on a uniqueness violation.
        Write { message: String } => "fixture seed write failed: {message}",
    }
}

/// Outcome of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingResult {
    /// Users and articles were inserted.
    Applied,
    /// The store already held users; nothing was written.
    AlreadySeeded,
}

/// Port for inserting [`FixtureContent`] in a single unit of work.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FixtureSeedRepository: Send + Sync {
    /// Insert the content unless the store already contains users.
    async fn seed(&self, content: &FixtureContent) -> Result<SeedingResult, FixtureSeedError>;
}
