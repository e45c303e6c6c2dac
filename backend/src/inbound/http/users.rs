//! Session endpoints.
//!
//! ```text
//! POST   /login          {"username":"alice"}
//! DELETE /logout
//! GET    /check_session
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::{Error, USER_NOT_FOUND_MESSAGE, User, UserValidationError, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /login`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Exact username of an existing user.
    #[schema(example = "alice")]
    pub username: String,
}

/// Parse the submitted name as a lookup key, unchanged.
///
/// A blank name is a bad request. A name longer than any stored username
/// cannot match, so it is reported like any other unknown user.
fn lookup_key(raw: &str) -> Result<Username, Error> {
    Username::new(raw).map_err(|err| match err {
        UserValidationError::UsernameTooLong { .. } => {
            debug!("login rejected: username exceeds stored width");
            Error::not_found(USER_NOT_FOUND_MESSAGE)
        }
        other => Error::invalid_request(other.to_string())
            .with_details(json!({ "field": "username", "reason": other.to_string() })),
    })
}

/// Establish a session for the named user.
///
/// There is no credential check; any existing username logs in. Logging in
/// again replaces the previous identity.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = UserSchema,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Malformed body or blank username", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<User>> {
    let username = lookup_key(&payload.username)?;
    let user = state.login.login(&username).await?;
    session.persist_user(user.id())?;
    Ok(web::Json(user))
}

/// Drop the session identity. Always succeeds.
#[utoipa::path(
    delete,
    path = "/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["session"],
    operation_id = "logout",
    security([])
)]
#[delete("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    if let Some(id) = session.user_id() {
        info!(user_id = %id, "logout");
    }
    session.clear();
    HttpResponse::NoContent().finish()
}

/// Report the user behind the current session.
///
/// An absent, invalid or dangling identity yields 401 with an empty body.
#[utoipa::path(
    get,
    path = "/check_session",
    responses(
        (status = 200, description = "Authenticated user", body = UserSchema),
        (status = 401, description = "No session identity"),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "checkSession"
)]
#[get("/check_session")]
pub async fn check_session(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let response = match session.current_user(state.identity.as_ref()).await? {
        Some(user) => HttpResponse::Ok().json(user),
        None => HttpResponse::Unauthorized().finish(),
    };
    Ok(response)
}
