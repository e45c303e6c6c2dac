//! Session identity use-cases: username login and identity resolution.
//!
//! Both operations are single reads against the [`UserRepository`]; the
//! session cookie itself is handled by the inbound adapter.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::ports::{IdentityQuery, LoginService, UserPersistenceError, UserRepository};
use super::{Error, User, UserId, Username};

/// Message returned when a login names an unknown user.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Implements [`LoginService`] and [`IdentityQuery`] on top of a user
/// repository.
#[derive(Clone)]
pub struct SessionService {
    users: Arc<dyn UserRepository>,
}

impl SessionService {
    /// Create a service reading from `users`.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl LoginService for SessionService {
    async fn login(&self, username: &Username) -> Result<User, Error> {
        let user = self
            .users
            .find_by_username(username)
            .await
            .map_err(map_user_persistence_error)?;

        match user {
            Some(user) => {
                info!(user_id = %user.id(), "login accepted");
                Ok(user)
            }
            None => {
                debug!(username = %username, "login rejected: unknown username");
                Err(Error::not_found(USER_NOT_FOUND_MESSAGE))
            }
        }
    }
}

#[async_trait]
impl IdentityQuery for SessionService {
    async fn resolve(&self, user_id: &UserId) -> Result<Option<User>, Error> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(map_user_persistence_error)?;
        if user.is_none() {
            debug!(user_id = %user_id, "session references a missing user");
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserRepository;
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn alice() -> User {
        User::try_from_parts(1, "alice").expect("valid user")
    }

    fn username(raw: &str) -> Username {
        Username::new(raw).expect("valid username")
    }

    fn service(repository: MockUserRepository) -> SessionService {
        SessionService::new(Arc::new(repository))
    }

    #[rstest]
    #[tokio::test]
    async fn login_returns_matching_user(alice: User) {
        let mut repository = MockUserRepository::new();
        let stored = alice.clone();
        repository
            .expect_find_by_username()
            .with(eq(username("alice")))
            .times(1)
            .return_once(move |_| Ok(Some(stored)));

        let user = service(repository)
            .login(&username("alice"))
            .await
            .expect("known username logs in");

        assert_eq!(user, alice);
    }

    #[rstest]
    #[tokio::test]
    async fn login_rejects_unknown_username() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_username()
            .return_once(|_| Ok(None));

        let err = service(repository)
            .login(&username("mallory"))
            .await
            .expect_err("unknown username must fail");

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), USER_NOT_FOUND_MESSAGE);
    }

    #[rstest]
    #[case(UserPersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(UserPersistenceError::query("bad row"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn login_maps_repository_failures(
        #[case] failure: UserPersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_username()
            .return_once(move |_| Err(failure));

        let err = service(repository)
            .login(&username("alice"))
            .await
            .expect_err("repository failure must surface");

        assert_eq!(err.code(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn resolve_returns_existing_user(alice: User) {
        let mut repository = MockUserRepository::new();
        let stored = alice.clone();
        repository
            .expect_find_by_id()
            .with(eq(alice.id()))
            .return_once(move |_| Ok(Some(stored)));

        let resolved = service(repository)
            .resolve(&alice.id())
            .await
            .expect("lookup succeeds");

        assert_eq!(resolved, Some(alice));
    }

    #[rstest]
    #[tokio::test]
    async fn resolve_treats_missing_user_as_absent_identity() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_id().return_once(|_| Ok(None));

        let resolved = service(repository)
            .resolve(&UserId::new(42).expect("valid id"))
            .await
            .expect("dangling id is not an error");

        assert!(resolved.is_none());
    }
}
