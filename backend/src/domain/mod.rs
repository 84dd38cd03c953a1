//! Domain primitives, validation and services.
//!
//! Purpose: define the resource entity, its request shapes and the closed
//! error taxonomy shared by every layer, plus the services that validate
//! input and orchestrate repository calls.
//!
//! Public surface:
//! - Resource, ResourceId, CreateResourceRequest, UpdateResourceRequest: the
//!   managed entity and its input shapes.
//! - ResourceError, ErrorCode: the closed failure taxonomy and wire codes.
//! - ResourceService: fail-fast validation gate over a repository.
//! - ResourceUseCases: driving ports backed by a unit of work.

pub mod error;
pub mod ports;
pub mod resource;
pub mod resource_service;
pub mod validation;

pub use self::error::{ErrorCode, ResourceError};
pub use self::resource::{CreateResourceRequest, Resource, ResourceId, UpdateResourceRequest};
pub use self::resource_service::{ResourceService, ResourceUseCases};
