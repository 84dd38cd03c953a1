//! Driving port for resource mutations.
//!
//! Every call validates its input and runs inside a single unit of work, so
//! either all of its storage effects commit or none do.

use async_trait::async_trait;

use crate::domain::{
    CreateResourceRequest, Resource, ResourceError, ResourceId, UpdateResourceRequest,
};

/// Domain use-case port for creating, updating and deleting resources.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourcesCommand: Send + Sync {
    /// Validate and insert a new resource.
    async fn create(&self, request: CreateResourceRequest) -> Result<Resource, ResourceError>;

    /// Validate and replace the fields of an existing resource.
    async fn update(
        &self,
        id: ResourceId,
        request: UpdateResourceRequest,
    ) -> Result<Resource, ResourceError>;

    /// Remove an existing resource.
    async fn delete(&self, id: ResourceId) -> Result<(), ResourceError>;
}
