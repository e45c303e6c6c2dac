//! Demo content loaded into an empty record store.
//!
//! Two users and two articles: one public and one member-only. The HTTP
//! behaviour tests and local development both rely on exactly this set.

use super::{ArticleDraft, Error, Username};

const DEMO_USERS: [&str; 2] = ["alice", "bob"];
const DEMO_ARTICLES: [(&str, &str, bool); 2] = [
    ("Public Article", "Everyone can read this.", false),
    ("Members Article", "Only members can read this.", true),
];

/// Users and articles to insert, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureContent {
    users: Vec<Username>,
    articles: Vec<ArticleDraft>,
}

impl FixtureContent {
    /// Build content from validated parts.
    pub fn new(users: Vec<Username>, articles: Vec<ArticleDraft>) -> Self {
        Self { users, articles }
    }

    /// The demo set: users `alice` and `bob`, one public and one
    /// member-only article.
    ///
    /// # Examples
    /// ```
    /// use article_gate::domain::FixtureContent;
    ///
    /// let content = FixtureContent::demo().expect("demo content is valid");
    /// assert_eq!(content.users().len(), 2);
    /// assert_eq!(content.articles().iter().filter(|a| a.is_member_only()).count(), 1);
    /// ```
    pub fn demo() -> Result<Self, Error> {
        let users = DEMO_USERS
            .iter()
            .map(|name| {
                Username::new(name)
                    .map_err(|err| Error::internal(format!("invalid fixture username: {err}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let articles = DEMO_ARTICLES
            .iter()
            .map(|(title, content, member_only)| {
                ArticleDraft::try_new(*title, *content, *member_only)
                    .map_err(|err| Error::internal(format!("invalid fixture article: {err}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(users, articles))
    }

    /// Usernames to insert.
    pub fn users(&self) -> &[Username] {
        &self.users
    }

    /// Articles to insert.
    pub fn articles(&self) -> &[ArticleDraft] {
        &self.articles
    }
}
