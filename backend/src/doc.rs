//! OpenAPI documentation for the HTTP API.
//!
//! Registers every handler path, the schema wrappers from
//! [`crate::inbound::http::schemas`] and the session cookie security scheme.
//! Served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, MemberArticleSchema, UserSchema,
};
use crate::inbound::http::users::LoginRequest;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

struct SessionCookieScheme;

impl Modify for SessionCookieScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Encrypted session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SessionCookieScheme),
    info(
        title = "Article gate API",
        description = "Username sessions and member-only article reads."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::check_session,
        crate::inbound::http::articles::list_member_articles,
        crate::inbound::http::articles::get_member_article,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        LoginRequest,
        UserSchema,
        MemberArticleSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "session", description = "Login, logout and session checks"),
        (name = "articles", description = "Member-only articles"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
