//! bb8 pool of `diesel-async` PostgreSQL connections.
//!
//! Repositories hold a cloned [`DbPool`] and check out one connection per
//! query. Pool failures surface as [`PoolError`], which the repositories fold
//! into their own `Connection` variants.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use tracing::debug;

use crate::domain::ports::define_port_error;

const DEFAULT_MAX_SIZE: u32 = 5;
const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(10);

define_port_error! {
    /// Failures raised while building the pool or checking out a connection.
    pub enum PoolError {
        /// No connection became available within the checkout timeout.
        Checkout { message: String } => "connection checkout failed: {message}",
        /// The pool could not be created, for example from a malformed URL.
        Build { message: String } => "connection pool build failed: {message}",
    }
}

impl PoolError {
    /// Consume the error, keeping only its message.
    pub fn into_message(self) -> String {
        match self {
            Self::Checkout { message } | Self::Build { message } => message,
        }
    }
}

/// Pool sizing and timeouts.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use article_gate::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://localhost/articles")
///     .with_max_size(8)
///     .with_connection_timeout(Duration::from_secs(3));
/// assert_eq!(config.max_size(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Five connections, no idle floor and a ten second checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_SIZE,
            min_idle: None,
            connection_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_max_size(self, max_size: u32) -> Self {
        Self { max_size, ..self }
    }

    #[must_use]
    pub fn with_min_idle(self, min_idle: Option<u32>) -> Self {
        Self { min_idle, ..self }
    }

    #[must_use]
    pub fn with_connection_timeout(self, connection_timeout: Duration) -> Self {
        Self {
            connection_timeout,
            ..self
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }
}

/// Shared handle to the connection pool; cloning is cheap.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when bb8 rejects the configuration or the
    /// initial connections cannot be opened.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let PoolConfig {
            database_url,
            max_size,
            min_idle,
            connection_timeout,
        } = config;
        debug!(max_size, ?min_idle, ?connection_timeout, "building connection pool");

        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
        Pool::builder()
            .max_size(max_size)
            .min_idle(min_idle)
            .connection_timeout(connection_timeout)
            .build(manager)
            .await
            .map(|inner| Self { inner })
            .map_err(|err| PoolError::build(err.to_string()))
    }

    /// Check out a connection.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] when the timeout elapses first.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_config_uses_small_defaults() {
        let config = PoolConfig::new("postgres://localhost/articles");

        assert_eq!(config.database_url(), "postgres://localhost/articles");
        assert_eq!(config.max_size(), DEFAULT_MAX_SIZE);
        assert_eq!(config.min_idle, None);
        assert_eq!(config.connection_timeout, DEFAULT_CHECKOUT_TIMEOUT);
    }

    #[rstest]
    fn builders_only_touch_their_own_field() {
        let config = PoolConfig::new("postgres://localhost/articles")
            .with_min_idle(Some(2))
            .with_max_size(12);

        assert_eq!(config.max_size(), 12);
        assert_eq!(config.min_idle, Some(2));
        assert_eq!(config.connection_timeout, DEFAULT_CHECKOUT_TIMEOUT);
    }

    #[rstest]
    #[case(PoolError::checkout("timed out"), "connection checkout failed: timed out")]
    #[case(PoolError::build("invalid URL"), "connection pool build failed: invalid URL")]
    fn errors_render_and_release_their_message(
        #[case] error: PoolError,
        #[case] rendered: &str,
    ) {
        assert_eq!(error.to_string(), rendered);
        let message = error.into_message();
        assert!(rendered.ends_with(&message));
    }
}
