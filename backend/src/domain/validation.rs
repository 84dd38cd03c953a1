//! Fail-fast validation of resource field values.
//!
//! Rules run in a fixed order (name, email, age) and the first violation is
//! returned. Callers rely on that order when several fields are invalid at
//! once.

use std::sync::OnceLock;

use regex::Regex;

use super::{CreateResourceRequest, ResourceError, UpdateResourceRequest};

/// Inclusive lower bound for `age`.
pub const AGE_MIN: i32 = 0;
/// Inclusive upper bound for `age`.
pub const AGE_MAX: i32 = 150;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // local-part "@" domain "." tld, no whitespace or extra '@' anywhere.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Validate raw field values in rule order.
///
/// # Examples
/// ```
/// use roster::domain::validation::validate_fields;
///
/// assert!(validate_fields("Ada", "ada@example.com", 36).is_ok());
/// let err = validate_fields(" ", "not-an-email", 200).expect_err("name fails first");
/// assert_eq!(err.to_string(), "name cannot be empty");
/// ```
pub fn validate_fields(name: &str, email: &str, age: i32) -> Result<(), ResourceError> {
    if name.trim().is_empty() {
        return Err(ResourceError::validation("name", "cannot be empty"));
    }
    if !email_regex().is_match(email) {
        return Err(ResourceError::validation(
            "email",
            "must be valid email address",
        ));
    }
    if !(AGE_MIN..=AGE_MAX).contains(&age) {
        return Err(ResourceError::validation(
            "age",
            "must be between 0 and 150",
        ));
    }
    Ok(())
}

/// Validate a create request.
pub fn validate_create(request: &CreateResourceRequest) -> Result<(), ResourceError> {
    validate_fields(&request.name, &request.email, request.age)
}

/// Validate an update request.
pub fn validate_update(request: &UpdateResourceRequest) -> Result<(), ResourceError> {
    validate_fields(&request.name, &request.email, request.age)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn field_of(error: &ResourceError) -> &str {
        match error {
            ResourceError::Validation { field, .. } => field.as_str(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[rstest]
    #[case("Alice", "alice@example.com", 30)]
    #[case("  Bob  ", "bob.smith+tag@mail.example.org", 0)]
    #[case("Methuselah", "m@x.io", 150)]
    fn accepts_valid_fields(#[case] name: &str, #[case] email: &str, #[case] age: i32) {
        assert!(validate_fields(name, email, age).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn rejects_blank_names(#[case] name: &str) {
        let err = validate_fields(name, "x@y.com", 30).expect_err("blank name");
        assert_eq!(err, ResourceError::validation("name", "cannot be empty"));
    }

    #[rstest]
    #[case("plainaddress")]
    #[case("missing-at.example.com")]
    #[case("no-tld@example")]
    #[case("two@@example.com")]
    #[case("white space@example.com")]
    #[case("trailing@example.com ")]
    #[case("@example.com")]
    #[case("user@.")]
    fn rejects_malformed_emails(#[case] email: &str) {
        let err = validate_fields("Alice", email, 30).expect_err("malformed email");
        assert_eq!(
            err,
            ResourceError::validation("email", "must be valid email address")
        );
    }

    #[rstest]
    #[case(-1)]
    #[case(151)]
    #[case(i32::MIN)]
    #[case(i32::MAX)]
    fn rejects_out_of_range_ages(#[case] age: i32) {
        let err = validate_fields("Alice", "alice@example.com", age).expect_err("bad age");
        assert_eq!(
            err,
            ResourceError::validation("age", "must be between 0 and 150")
        );
    }

    #[rstest]
    #[case("", "bad", -5, "name")]
    #[case("Alice", "bad", -5, "email")]
    #[case("Alice", "alice@example.com", -5, "age")]
    fn first_failing_rule_wins(
        #[case] name: &str,
        #[case] email: &str,
        #[case] age: i32,
        #[case] expected_field: &str,
    ) {
        let err = validate_fields(name, email, age).expect_err("invalid input");
        assert_eq!(field_of(&err), expected_field);
    }

    #[rstest]
    fn create_and_update_share_rules() {
        let create = CreateResourceRequest::new("", "x@y.com", 30);
        let update = UpdateResourceRequest::new("", "x@y.com", 30);
        assert_eq!(
            validate_create(&create).expect_err("create"),
            validate_update(&update).expect_err("update")
        );
    }
}
