//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; the wrappers here mirror them for
//! utoipa registration only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// No resource has the requested identifier.
    #[schema(rename = "not_found")]
    NotFound,
    /// A path, body or field value failed validation.
    #[schema(rename = "validation_error")]
    ValidationError,
    /// Another resource already uses the email address.
    #[schema(rename = "duplicate_email")]
    DuplicateEmail,
    /// Unexpected storage failure; no detail is exposed.
    #[schema(rename = "internal_error")]
    InternalError,
}
