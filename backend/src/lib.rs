//! Roster: typed-error CRUD service over PostgreSQL.
//!
//! Layout follows ports and adapters: [`domain`] holds the entity, the error
//! taxonomy, validation and services; [`inbound`] renders them over HTTP;
//! [`outbound`] persists them with Diesel.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
