//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! The cookie holds a single integer under `user_id`. A value that cannot be
//! read back as a valid [`UserId`] is logged and treated as "no identity";
//! it never fails the request.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::ports::IdentityQuery;
use crate::domain::{Error, User, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store `user_id` as the session identity, replacing any previous one.
    ///
    /// The session key is renewed so a cookie issued before login cannot be
    /// reused afterwards.
    pub fn persist_user(&self, user_id: UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.get())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Identifier stored in the cookie, if any.
    pub fn user_id(&self) -> Option<UserId> {
        let raw = match self.0.get::<i32>(USER_ID_KEY) {
            Ok(raw) => raw?,
            Err(error) => {
                warn!(%error, "unreadable user id in session cookie");
                return None;
            }
        };
        UserId::new(raw)
            .inspect_err(|error| warn!(%error, raw, "invalid user id in session cookie"))
            .ok()
    }

    /// Resolve the stored identifier to a user record.
    ///
    /// Returns `Ok(None)` when no identifier is stored or the user no longer
    /// exists.
    pub async fn current_user(&self, identity: &dyn IdentityQuery) -> Result<Option<User>, Error> {
        match self.user_id() {
            Some(id) => identity.resolve(&id).await,
            None => Ok(None),
        }
    }

    /// Drop the session identity and expire the cookie.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
