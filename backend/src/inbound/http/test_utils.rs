//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, config::CookieContentSecurity, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;

/// Cookie name shared by production and test session middleware.
pub const SESSION_COOKIE_NAME: &str = "session";

/// Build a session middleware configured for tests.
///
/// Uses a fresh key per invocation and disables the `Secure` flag so cookies
/// round-trip over plain HTTP test requests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_secure(false)
        .build()
}

/// Extract the session cookie set by `response`.
///
/// # Panics
///
/// Panics when the response does not set a session cookie.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
        .unwrap_or_else(|| panic!("response did not set the `{SESSION_COOKIE_NAME}` cookie"))
}
