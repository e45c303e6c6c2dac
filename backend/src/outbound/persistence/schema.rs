//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Login identities.
    users (id) {
        /// Primary key assigned by `SERIAL`.
        id -> Int4,
        /// Unique login name.
        username -> Varchar,
    }
}

diesel::table! {
    /// Articles, public or member-only.
    articles (id) {
        /// Primary key assigned by `SERIAL`.
        id -> Int4,
        title -> Varchar,
        content -> Text,
        /// Fixed classification; only seeding writes it.
        is_member_only -> Bool,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, articles);
