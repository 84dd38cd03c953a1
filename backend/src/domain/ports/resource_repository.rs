//! Port for resource persistence.
//!
//! A [`ResourceRepository`] translates domain operations into storage calls
//! and classifies every storage failure into a [`ResourceError`]. Adapters
//! are bound to the connection of the unit of work that created them, which
//! is why methods take `&mut self`.

use async_trait::async_trait;

use crate::domain::{
    CreateResourceRequest, Resource, ResourceError, ResourceId, UpdateResourceRequest,
};

/// Storage operations over the resource table.
///
/// # Existence checks
///
/// [`ResourceRepository::update`] and [`ResourceRepository::delete`] look the
/// record up first and return [`ResourceError::NotFound`] without issuing a
/// mutating statement when it is absent.
///
/// # Uniqueness
///
/// Writes that violate the email uniqueness constraint return
/// [`ResourceError::DuplicateKey`] carrying the offending email. All other
/// storage failures become [`ResourceError::Storage`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceRepository: Send {
    /// Fetch a resource by identifier.
    async fn find_by_id(&mut self, id: ResourceId) -> Result<Resource, ResourceError>;

    /// Fetch every resource ordered by identifier.
    async fn find_all(&mut self) -> Result<Vec<Resource>, ResourceError>;

    /// Look a resource up by email. Not exposed to inbound adapters.
    async fn find_by_email(&mut self, email: &str) -> Result<Option<Resource>, ResourceError>;

    /// Insert a new resource; the store assigns the id and timestamps.
    async fn create(
        &mut self,
        request: &CreateResourceRequest,
    ) -> Result<Resource, ResourceError>;

    /// Replace the fields of an existing resource and bump `updated_at`.
    async fn update(
        &mut self,
        id: ResourceId,
        request: &UpdateResourceRequest,
    ) -> Result<Resource, ResourceError>;

    /// Remove an existing resource.
    async fn delete(&mut self, id: ResourceId) -> Result<(), ResourceError>;
}
