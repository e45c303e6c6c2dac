//! In-process record store backed by ordered maps.
//!
//! Used when no database URL is configured and by the HTTP behaviour tests.
//! Identifiers are assigned sequentially from 1, like a `SERIAL` column, and
//! usernames are unique.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{
    ArticlePersistenceError, ArticleRepository, FixtureSeedError, FixtureSeedRepository,
    SeedingResult, UserPersistenceError, UserRepository,
};
use crate::domain::{
    Article, ArticleDraft, ArticleId, Error, FixtureContent, User, UserId, Username,
};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    articles: BTreeMap<ArticleId, Article>,
    next_user_id: i32,
    next_article_id: i32,
}

impl Tables {
    fn insert_user(&mut self, username: &Username) -> Result<User, FixtureSeedError> {
        if self.users.values().any(|user| user.username() == username) {
            return Err(FixtureSeedError::write(format!(
                "duplicate username: {username}"
            )));
        }
        self.next_user_id += 1;
        let id = UserId::new(self.next_user_id)
            .map_err(|err| FixtureSeedError::write(err.to_string()))?;
        let user = User::new(id, username.clone());
        self.users.insert(id, user.clone());
        Ok(user)
    }

    fn insert_article(&mut self, draft: &ArticleDraft) -> Result<Article, FixtureSeedError> {
        self.next_article_id += 1;
        let id = ArticleId::new(self.next_article_id)
            .map_err(|err| FixtureSeedError::write(err.to_string()))?;
        let article = draft.clone().with_id(id);
        self.articles.insert(id, article.clone());
        Ok(article)
    }
}

/// Record store holding users and articles in memory.
///
/// # Examples
/// ```
/// use article_gate::outbound::memory::InMemoryRecordStore;
///
/// let store = InMemoryRecordStore::with_fixtures().expect("demo content loads");
/// assert_eq!(store.user_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    tables: RwLock<Tables>,
}

fn poisoned<T>(_: PoisonError<T>) -> String {
    "record store lock poisoned".to_owned()
}

impl InMemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with [`FixtureContent::demo`].
    pub fn with_fixtures() -> Result<Self, Error> {
        let store = Self::new();
        let content = FixtureContent::demo()?;
        store
            .apply(&content)
            .map_err(|err| Error::internal(err.to_string()))?;
        Ok(store)
    }

    /// Insert a user, refusing duplicate usernames.
    pub fn insert_user(&self, username: &Username) -> Result<User, FixtureSeedError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|err| FixtureSeedError::write(poisoned(err)))?;
        tables.insert_user(username)
    }

    /// Insert an article and return it with its assigned id.
    pub fn insert_article(&self, draft: &ArticleDraft) -> Result<Article, FixtureSeedError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|err| FixtureSeedError::write(poisoned(err)))?;
        tables.insert_article(draft)
    }

    /// Remove a user, leaving any session that references it dangling.
    pub fn remove_user(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|err| UserPersistenceError::query(poisoned(err)))?;
        Ok(tables.users.remove(&id))
    }

    /// Number of stored users; zero if the lock is poisoned.
    pub fn user_count(&self) -> usize {
        self.tables.read().map(|t| t.users.len()).unwrap_or_default()
    }

    fn apply(&self, content: &FixtureContent) -> Result<SeedingResult, FixtureSeedError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|err| FixtureSeedError::write(poisoned(err)))?;
        if !tables.users.is_empty() {
            return Ok(SeedingResult::AlreadySeeded);
        }
        // Stage into a copy so a duplicate username leaves the store untouched.
        let mut staged = Tables {
            users: BTreeMap::new(),
            articles: tables.articles.clone(),
            next_user_id: tables.next_user_id,
            next_article_id: tables.next_article_id,
        };
        for username in content.users() {
            staged.insert_user(username)?;
        }
        for draft in content.articles() {
            staged.insert_article(draft)?;
        }
        *tables = staged;
        Ok(SeedingResult::Applied)
    }
}

#[async_trait]
impl UserRepository for InMemoryRecordStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let tables = self
            .tables
            .read()
            .map_err(|err| UserPersistenceError::query(poisoned(err)))?;
        Ok(tables.users.get(id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        let tables = self
            .tables
            .read()
            .map_err(|err| UserPersistenceError::query(poisoned(err)))?;
        Ok(tables
            .users
            .values()
            .find(|user| user.username() == username)
            .cloned())
    }
}

#[async_trait]
impl ArticleRepository for InMemoryRecordStore {
    async fn find_by_id(&self, id: &ArticleId) -> Result<Option<Article>, ArticlePersistenceError> {
        let tables = self
            .tables
            .read()
            .map_err(|err| ArticlePersistenceError::query(poisoned(err)))?;
        Ok(tables.articles.get(id).cloned())
    }

    async fn find_by_membership(
        &self,
        is_member_only: bool,
    ) -> Result<Vec<Article>, ArticlePersistenceError> {
        let tables = self
            .tables
            .read()
            .map_err(|err| ArticlePersistenceError::query(poisoned(err)))?;
        Ok(tables
            .articles
            .values()
            .filter(|article| article.is_member_only() == is_member_only)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FixtureSeedRepository for InMemoryRecordStore {
    async fn seed(&self, content: &FixtureContent) -> Result<SeedingResult, FixtureSeedError> {
        self.apply(content)
    }
}
