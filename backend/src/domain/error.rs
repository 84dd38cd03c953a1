//! Domain-level error taxonomy.
//!
//! [`ResourceError`] is the only error type that crosses the repository,
//! service and transport boundaries. It is transport agnostic: inbound
//! adapters translate [`ResourceError::code`] and [`ResourceError::details`]
//! into HTTP statuses and bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::ResourceId;
use super::ports::define_port_error;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No resource exists with the requested identifier.
    NotFound,
    /// The input failed a business rule before reaching storage.
    ValidationError,
    /// The email uniqueness constraint rejected the write.
    DuplicateEmail,
    /// Any other storage failure.
    InternalError,
}

impl ErrorCode {
    /// Wire tag for this code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::ValidationError => "validation_error",
            Self::DuplicateEmail => "duplicate_email",
            Self::InternalError => "internal_error",
        }
    }
}

define_port_error! {
    /// Closed set of failures produced while handling a resource request.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::{ErrorCode, ResourceError};
    ///
    /// let err = ResourceError::validation("name", "cannot be empty");
    /// assert_eq!(err.code(), ErrorCode::ValidationError);
    /// assert_eq!(err.to_string(), "name cannot be empty");
    /// ```
    pub enum ResourceError {
        /// No resource with this identifier exists.
        NotFound { id: ResourceId } => "resource {id} not found",
        /// An input field failed validation.
        Validation { field: String, issue: String } => "{field} {issue}",
        /// A uniqueness constraint rejected the value.
        DuplicateKey { value: String } => "a resource with email {value} already exists",
        /// Storage failed for a reason not otherwise classified.
        Storage { cause: String } => "storage failure: {cause}",
    }
}

impl ResourceError {
    /// Stable machine-readable code for this failure.
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::Validation { .. } => ErrorCode::ValidationError,
            Self::DuplicateKey { .. } => ErrorCode::DuplicateEmail,
            Self::Storage { .. } => ErrorCode::InternalError,
        }
    }

    /// Structured fields describing the failure.
    ///
    /// Storage failures carry no caller-visible detail.
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::NotFound { id } => Some(json!({ "id": id.to_string() })),
            Self::Validation { field, issue } => Some(json!({ "field": field, "issue": issue })),
            Self::DuplicateKey { value } => Some(json!({ "email": value })),
            Self::Storage { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error codes and details.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ResourceError::not_found(ResourceId::new(7)), ErrorCode::NotFound, "not_found")]
    #[case(
        ResourceError::validation("age", "must be between 0 and 150"),
        ErrorCode::ValidationError,
        "validation_error"
    )]
    #[case(
        ResourceError::duplicate_key("a@b.co"),
        ErrorCode::DuplicateEmail,
        "duplicate_email"
    )]
    #[case(ResourceError::storage("socket closed"), ErrorCode::InternalError, "internal_error")]
    fn codes_match_wire_tags(
        #[case] error: ResourceError,
        #[case] code: ErrorCode,
        #[case] tag: &str,
    ) {
        assert_eq!(error.code(), code);
        assert_eq!(code.as_str(), tag);
        let serialised = serde_json::to_value(code).expect("serialise code");
        assert_eq!(serialised, Value::String(tag.to_owned()));
    }

    #[rstest]
    fn not_found_details_render_id_as_string() {
        let details = ResourceError::not_found(ResourceId::new(999))
            .details()
            .expect("details present");
        assert_eq!(details, json!({ "id": "999" }));
    }

    #[rstest]
    fn validation_details_carry_field_and_issue() {
        let details = ResourceError::validation("name", "cannot be empty")
            .details()
            .expect("details present");
        assert_eq!(details, json!({ "field": "name", "issue": "cannot be empty" }));
    }

    #[rstest]
    fn duplicate_details_carry_email() {
        let details = ResourceError::duplicate_key("alice@example.com")
            .details()
            .expect("details present");
        assert_eq!(details, json!({ "email": "alice@example.com" }));
    }

    #[rstest]
    fn storage_errors_have_no_details() {
        assert!(ResourceError::storage("boom").details().is_none());
    }

    #[rstest]
    fn display_includes_cause_for_logs() {
        let err = ResourceError::storage("connection reset");
        assert_eq!(err.to_string(), "storage failure: connection reset");
    }
}
