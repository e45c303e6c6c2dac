//! Member-only article endpoints.
//!
//! ```text
//! GET /members_only_articles
//! GET /members_only_articles/{id}
//! ```
//!
//! Both require a session identity that resolves to an existing user.

use actix_web::{get, web};
use serde_json::json;
use tracing::debug;

use crate::domain::{ARTICLE_NOT_FOUND_MESSAGE, ArticleId, Error, MemberArticle, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, MemberArticleSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Message returned when no identity is attached to the request.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

async fn require_member(state: &HttpState, session: &SessionContext) -> Result<User, Error> {
    session
        .current_user(state.identity.as_ref())
        .await?
        .ok_or_else(|| {
            debug!("member-only request without a resolvable identity");
            Error::unauthorized(UNAUTHORIZED_MESSAGE)
        })
}

fn parse_article_id(raw: &str) -> Result<ArticleId, Error> {
    let value = raw.parse::<i32>().map_err(|_| {
        Error::invalid_request("article id must be an integer")
            .with_details(json!({ "field": "id", "value": raw }))
    })?;
    // Non-positive ids cannot exist; answer like any other missing row.
    ArticleId::new(value).map_err(|_| Error::not_found(ARTICLE_NOT_FOUND_MESSAGE))
}

/// List every member-only article.
#[utoipa::path(
    get,
    path = "/members_only_articles",
    responses(
        (status = 200, description = "Member-only articles", body = [MemberArticleSchema]),
        (status = 401, description = "No session identity", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "listMemberArticles"
)]
#[get("/members_only_articles")]
pub async fn list_member_articles(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<MemberArticle>>> {
    let user = require_member(&state, &session).await?;
    let articles = state.articles.list(&user).await?;
    Ok(web::Json(articles))
}

/// Fetch one member-only article.
///
/// Unknown ids and public articles both answer 404 with the same message.
#[utoipa::path(
    get,
    path = "/members_only_articles/{id}",
    params(("id" = i32, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Member-only article", body = MemberArticleSchema),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 401, description = "No session identity", body = ErrorSchema),
        (status = 404, description = "Article not found or not member-only", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "getMemberArticle"
)]
#[get("/members_only_articles/{id}")]
pub async fn get_member_article(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<MemberArticle>> {
    // Identity first: anonymous callers get 401 whatever the id looks like.
    let user = require_member(&state, &session).await?;
    let id = parse_article_id(path.as_str())?;
    let article = state.articles.fetch(&user, id).await?;
    Ok(web::Json(article))
}
