//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ARTICLE_GATE_*` environment variables and
//! configuration files, in that order of precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 5;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address '{value}': {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ARTICLE_GATE")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Insert the demo users and articles into an empty database at startup.
    #[ortho_config(default = false)]
    pub seed_fixtures: bool,
}

impl AppSettings {
    /// Configured bind address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Configured pool size, defaulting to 5.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "ARTICLE_GATE_BIND_ADDR",
        "ARTICLE_GATE_DATABASE_URL",
        "ARTICLE_GATE_POOL_MAX_SIZE",
        "ARTICLE_GATE_SEED_FIXTURES",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("article-gate")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            DEFAULT_BIND_ADDR.parse::<SocketAddr>().expect("valid constant")
        );
        assert!(settings.database_url.is_none());
        assert_eq!(settings.pool_max_size(), DEFAULT_POOL_MAX_SIZE);
        assert!(!settings.seed_fixtures);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ARTICLE_GATE_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "ARTICLE_GATE_DATABASE_URL",
                Some("postgres://localhost/articles".to_owned()),
            ),
            ("ARTICLE_GATE_POOL_MAX_SIZE", Some("12".to_owned())),
            ("ARTICLE_GATE_SEED_FIXTURES", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("address parses").port(),
            9000
        );
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://localhost/articles")
        );
        assert_eq!(settings.pool_max_size(), 12);
        assert!(settings.seed_fixtures);
    }

    #[rstest]
    fn invalid_bind_address_is_reported() {
        let settings = AppSettings {
            bind_addr: Some("not-an-address".to_owned()),
            database_url: None,
            pool_max_size: None,
            seed_fixtures: false,
        };

        let err = settings.bind_addr().expect_err("invalid address must fail");
        assert!(err.to_string().contains("not-an-address"));
    }
}
