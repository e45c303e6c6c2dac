//! Session-gated article service.
//!
//! A username-only login establishes an encrypted cookie session; logged-in
//! users can read articles flagged as member-only. The crate is laid out as
//! hexagonal layers:
//!
//! - [`domain`]: entities, errors, ports and services.
//! - [`inbound`]: actix-web handlers and session plumbing.
//! - [`outbound`]: the in-memory and PostgreSQL record stores.
//! - [`middleware`]: request tracing.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
