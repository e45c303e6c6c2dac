//! HTTP inbound adapter exposing the session and article endpoints.
//!
//! Routes live at the application root. Session-gated handlers read the
//! identity through [`session::SessionContext`]; the session middleware
//! itself is attached by the caller so tests can supply their own key.

use actix_web::web;

pub mod articles;
pub mod error;
pub mod health;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;

/// Register extractor configuration and every session-gated route.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use article_gate::inbound::http::configure_routes;
///
/// let app = App::new().configure(configure_routes);
/// ```
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(users::login)
        .service(users::logout)
        .service(users::check_session)
        .service(articles::list_member_articles)
        .service(articles::get_member_article);
}
