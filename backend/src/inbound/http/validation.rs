//! Request-shape validation for the HTTP adapter.
//!
//! Field rules live in [`crate::domain::validation`]; this module only turns
//! malformed paths and bodies into [`ResourceError::Validation`] so they share
//! the error body used everywhere else.

use actix_web::web;

use crate::domain::{ResourceError, ResourceId};

/// Parse the `{id}` path segment.
///
/// # Examples
/// ```
/// use roster::domain::ResourceId;
/// use roster::inbound::http::validation::parse_resource_id;
///
/// assert_eq!(parse_resource_id("42").expect("numeric"), ResourceId::new(42));
/// assert!(parse_resource_id("forty-two").is_err());
/// ```
pub fn parse_resource_id(raw: &str) -> Result<ResourceId, ResourceError> {
    raw.parse::<i64>()
        .map(ResourceId::new)
        .map_err(|_| ResourceError::validation("id", "must be an integer"))
}

/// JSON extractor configuration reporting malformed bodies as validation
/// failures on the `body` field.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ResourceError::validation("body", err.to_string()).into())
}
