//! Article data model and the member-only view exposed to sessions.
//!
//! Articles are immutable once stored. The `is_member_only` flag is a fixed
//! classification set when the article is seeded; no operation changes it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum allowed title length, matching the `articles.title` column width.
pub const TITLE_MAX: usize = 200;

/// Validation errors returned by the [`Article`] constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArticleValidationError {
    /// Identifier was zero or negative.
    #[error("article id must be a positive integer")]
    InvalidId,
    /// Title was blank once trimmed.
    #[error("article title must not be empty")]
    EmptyTitle,
    /// Title exceeded [`TITLE_MAX`] characters.
    #[error("article title must be at most {max} characters")]
    TitleTooLong { max: usize },
    /// Content was blank once trimmed.
    #[error("article content must not be empty")]
    EmptyContent,
}

/// Stable article identifier generated by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct ArticleId(i32);

impl ArticleId {
    /// Validate and construct an [`ArticleId`].
    pub fn new(id: i32) -> Result<Self, ArticleValidationError> {
        if id <= 0 {
            return Err(ArticleValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Raw integer key.
    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ArticleId> for i32 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl TryFrom<i32> for ArticleId {
    type Error = ArticleValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unsaved article content; the record store assigns the identifier.
///
/// ## Invariants
/// - `title` is non-empty and at most [`TITLE_MAX`] characters.
/// - `content` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    title: String,
    content: String,
    is_member_only: bool,
}

impl ArticleDraft {
    /// Validate title and content.
    ///
    /// # Examples
    /// ```
    /// use article_gate::domain::ArticleDraft;
    ///
    /// let draft = ArticleDraft::try_new("Members Article", "Only members can read this.", true)
    ///     .expect("valid draft");
    /// assert!(draft.is_member_only());
    /// ```
    pub fn try_new(
        title: impl Into<String>,
        content: impl Into<String>,
        is_member_only: bool,
    ) -> Result<Self, ArticleValidationError> {
        let title = title.into();
        let content = content.into();
        if title.trim().is_empty() {
            return Err(ArticleValidationError::EmptyTitle);
        }
        if title.chars().count() > TITLE_MAX {
            return Err(ArticleValidationError::TitleTooLong { max: TITLE_MAX });
        }
        if content.trim().is_empty() {
            return Err(ArticleValidationError::EmptyContent);
        }
        Ok(Self {
            title,
            content,
            is_member_only,
        })
    }

    /// Headline text.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Body text.
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// Whether only authenticated sessions may read the article.
    pub fn is_member_only(&self) -> bool {
        self.is_member_only
    }

    /// Attach the identifier assigned by the record store.
    pub fn with_id(self, id: ArticleId) -> Article {
        Article { id, draft: self }
    }
}

/// Stored article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    draft: ArticleDraft,
}

impl Article {
    /// Fallible constructor from raw parts, used when mapping stored rows.
    pub fn try_from_parts(
        id: i32,
        title: impl Into<String>,
        content: impl Into<String>,
        is_member_only: bool,
    ) -> Result<Self, ArticleValidationError> {
        let id = ArticleId::new(id)?;
        Ok(ArticleDraft::try_new(title, content, is_member_only)?.with_id(id))
    }

    /// Stable article identifier.
    pub fn id(&self) -> ArticleId {
        self.id
    }

    /// Headline text.
    pub fn title(&self) -> &str {
        self.draft.title()
    }

    /// Body text.
    pub fn content(&self) -> &str {
        self.draft.content()
    }

    /// Whether only authenticated sessions may read the article.
    pub fn is_member_only(&self) -> bool {
        self.draft.is_member_only()
    }
}

/// Member-facing projection of an [`Article`]: `{id, title, content}`.
///
/// The membership flag is deliberately absent; every value of this type was
/// produced from a member-only article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberArticle {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
}

impl MemberArticle {
    /// Project a member-only article, returning `None` for public ones.
    pub fn from_member_only(article: Article) -> Option<Self> {
        if !article.is_member_only() {
            return None;
        }
        let Article { id, draft } = article;
        Some(Self {
            id,
            title: draft.title,
            content: draft.content,
        })
    }
}
