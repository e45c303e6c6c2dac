//! Record store selection and startup preparation.
//!
//! With a database URL the Diesel adapters are used after pending migrations
//! run; otherwise an in-memory store pre-loaded with the demo content.

use std::sync::Arc;

use tracing::info;

use article_gate::domain::FixtureContent;
use article_gate::domain::ports::{
    ArticleRepository, FixtureSeedRepository, SeedingResult, UserRepository,
};
use article_gate::inbound::http::state::HttpState;
use article_gate::outbound::memory::InMemoryRecordStore;
use article_gate::outbound::persistence::{
    DbPool, DieselArticleRepository, DieselFixtureSeedRepository, DieselUserRepository,
    PoolConfig, run_migrations,
};

use super::settings::AppSettings;

/// Driven port implementations backing one record store.
pub struct RecordStore {
    users: Arc<dyn UserRepository>,
    articles: Arc<dyn ArticleRepository>,
    seeder: Arc<dyn FixtureSeedRepository>,
}

impl RecordStore {
    fn in_memory() -> std::io::Result<Self> {
        let store = Arc::new(InMemoryRecordStore::with_fixtures().map_err(std::io::Error::other)?);
        Ok(Self {
            users: store.clone(),
            articles: store.clone(),
            seeder: store,
        })
    }

    async fn postgres(database_url: &str, pool_max_size: u32) -> std::io::Result<Self> {
        run_migrations(database_url)
            .await
            .map_err(std::io::Error::other)?;
        let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(pool_max_size))
            .await
            .map_err(std::io::Error::other)?;
        Ok(Self {
            users: Arc::new(DieselUserRepository::new(pool.clone())),
            articles: Arc::new(DieselArticleRepository::new(pool.clone())),
            seeder: Arc::new(DieselFixtureSeedRepository::new(pool)),
        })
    }

    /// Open the store described by `settings`.
    ///
    /// # Errors
    ///
    /// Fails when migrations cannot be applied or the pool cannot be built.
    pub async fn open(settings: &AppSettings) -> std::io::Result<Self> {
        match settings.database_url.as_deref() {
            Some(url) => {
                info!(pool_max_size = settings.pool_max_size(), "using PostgreSQL record store");
                Self::postgres(url, settings.pool_max_size()).await
            }
            None => {
                info!("no database URL configured; using in-memory record store");
                Self::in_memory()
            }
        }
    }

    /// Insert the demo content when the store holds no users.
    ///
    /// # Errors
    ///
    /// Fails when the content is invalid or the insert transaction fails.
    pub async fn seed_fixtures(&self) -> std::io::Result<SeedingResult> {
        let content = FixtureContent::demo().map_err(std::io::Error::other)?;
        let outcome = self
            .seeder
            .seed(&content)
            .await
            .map_err(std::io::Error::other)?;
        info!(?outcome, "fixture seeding finished");
        Ok(outcome)
    }

    /// Build handler state over this store.
    pub fn http_state(&self) -> HttpState {
        HttpState::from_repositories(self.users.clone(), self.articles.clone())
    }
}
