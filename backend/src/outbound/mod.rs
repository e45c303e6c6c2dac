//! Outbound adapters implementing domain ports for the record store.
//!
//! - **memory**: in-process store used without a database and in tests.
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM.
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
