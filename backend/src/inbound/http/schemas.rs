//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `utoipa`; these mirrors carry the documentation
//! and are registered under the domain type names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request body or path could not be interpreted.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The user store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "service_unavailable")]
    code: ErrorCodeSchema,
    /// Human-readable message. Internal errors always read
    /// `Internal server error`.
    #[schema(example = "user store connection failed: connection refused")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "Dino")]
    first_name: Option<String>,
    #[schema(example = "Petrucci")]
    last_name: Option<String>,
    #[schema(example = "dino@example.com")]
    email: Option<String>,
}
