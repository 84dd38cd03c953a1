//! Driving port for resource reads.
//!
//! Inbound adapters use this port to fetch resources without importing
//! outbound persistence concerns. Each call runs in its own unit of work.

use async_trait::async_trait;

use crate::domain::{Resource, ResourceError, ResourceId};

/// Domain use-case port for reading resources.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourcesQuery: Send + Sync {
    /// Return every resource ordered by identifier.
    async fn list(&self) -> Result<Vec<Resource>, ResourceError>;

    /// Return one resource or [`ResourceError::NotFound`].
    async fn get(&self, id: ResourceId) -> Result<Resource, ResourceError>;
}
