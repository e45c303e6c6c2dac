//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their wire
//! shape and register under the domain type names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request body or path is malformed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No valid session identity.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The user or article does not exist, or the article is public.
    #[schema(rename = "not_found")]
    NotFound,
    /// The record store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "Article not found or not member-only")]
    error: String,
    /// Identifier echoed in the `Trace-Id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary detail, present for some invalid requests.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Database identifier.
    #[schema(example = 1)]
    id: i32,
    /// Unique login name.
    #[schema(example = "alice")]
    username: String,
}

/// OpenAPI schema for [`crate::domain::MemberArticle`].
#[derive(ToSchema)]
#[schema(as = MemberArticle)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MemberArticleSchema {
    /// Database identifier.
    #[schema(example = 2)]
    id: i32,
    #[schema(example = "Members Article")]
    title: String,
    #[schema(example = "Only members can read this.")]
    content: String,
}
