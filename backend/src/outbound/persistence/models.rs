//! Internal Diesel row structs.
//!
//! These types never leave the persistence module; repositories convert them
//! into domain types through the validating constructors.

use diesel::prelude::*;

use super::schema::{articles, users};

/// Row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub username: String,
}

/// Insertable `users` row; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
}

/// Row read from `articles`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = articles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ArticleRow {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub is_member_only: bool,
}

/// Insertable `articles` row; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = articles)]
pub(crate) struct NewArticleRow<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub is_member_only: bool,
}
