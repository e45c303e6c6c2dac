//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories implement the domain's driven ports on top of a `bb8` pool
//! of `diesel-async` connections. Row structs and schema definitions stay
//! private to this module and are converted through the validating domain
//! constructors.
//!
//! # Example
//!
//! ```ignore
//! use article_gate::outbound::persistence::{DbPool, PoolConfig, DieselUserRepository};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/articles")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_article_repository;
mod diesel_error_mapping;
mod diesel_fixture_seed_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_article_repository::DieselArticleRepository;
pub use diesel_fixture_seed_repository::DieselFixtureSeedRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
