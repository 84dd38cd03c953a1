//! Resource domain services.
//!
//! [`ResourceService`] is the validation gate in front of a repository: it
//! runs fail-fast field validation for writes and passes everything else
//! through. [`ResourceUseCases`] implements the driving ports by running one
//! service invocation per [`UnitOfWork`].

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::FutureExt;

use crate::domain::ports::{ResourceRepository, ResourcesCommand, ResourcesQuery, UnitOfWork};
use crate::domain::validation::{validate_create, validate_update};
use crate::domain::{
    CreateResourceRequest, Resource, ResourceError, ResourceId, UpdateResourceRequest,
};

/// Validates inputs and orchestrates repository calls for one unit of work.
///
/// The service never rewrites a repository error; it only adds
/// [`ResourceError::Validation`] failures before the repository is reached.
pub struct ResourceService<'r> {
    repository: &'r mut dyn ResourceRepository,
}

impl<'r> ResourceService<'r> {
    /// Bind the service to a repository.
    pub fn new(repository: &'r mut dyn ResourceRepository) -> Self {
        Self { repository }
    }

    /// Fetch one resource.
    pub async fn find_by_id(&mut self, id: ResourceId) -> Result<Resource, ResourceError> {
        self.repository.find_by_id(id).await
    }

    /// Fetch every resource ordered by identifier.
    pub async fn find_all(&mut self) -> Result<Vec<Resource>, ResourceError> {
        self.repository.find_all().await
    }

    /// Validate and insert a new resource.
    ///
    /// Email uniqueness is left to the repository, which reports
    /// [`ResourceError::DuplicateKey`] from its constraint.
    pub async fn create(
        &mut self,
        request: CreateResourceRequest,
    ) -> Result<Resource, ResourceError> {
        validate_create(&request)?;
        self.repository.create(&request).await
    }

    /// Validate and replace the fields of an existing resource.
    ///
    /// An unknown `id` yields [`ResourceError::NotFound`] even when the new
    /// email is already taken; the repository checks existence first.
    pub async fn update(
        &mut self,
        id: ResourceId,
        request: UpdateResourceRequest,
    ) -> Result<Resource, ResourceError> {
        validate_update(&request)?;
        self.repository.update(id, &request).await
    }

    /// Remove an existing resource.
    pub async fn delete(&mut self, id: ResourceId) -> Result<(), ResourceError> {
        self.repository.delete(id).await
    }
}

/// Driving-port implementation running each request in its own unit of work.
#[derive(Clone)]
pub struct ResourceUseCases<U> {
    unit_of_work: Arc<U>,
}

impl<U> ResourceUseCases<U> {
    /// Create use cases over the given executor.
    pub fn new(unit_of_work: Arc<U>) -> Self {
        Self { unit_of_work }
    }
}

#[async_trait]
impl<U> ResourcesQuery for ResourceUseCases<U>
where
    U: UnitOfWork + 'static,
{
    async fn list(&self) -> Result<Vec<Resource>, ResourceError> {
        self.unit_of_work
            .execute(|repository| {
                async move { ResourceService::new(repository).find_all().await }.boxed()
            })
            .await
    }

    async fn get(&self, id: ResourceId) -> Result<Resource, ResourceError> {
        self.unit_of_work
            .execute(move |repository| {
                async move { ResourceService::new(repository).find_by_id(id).await }.boxed()
            })
            .await
    }
}

#[async_trait]
impl<U> ResourcesCommand for ResourceUseCases<U>
where
    U: UnitOfWork + 'static,
{
    async fn create(&self, request: CreateResourceRequest) -> Result<Resource, ResourceError> {
        self.unit_of_work
            .execute(move |repository| {
                async move { ResourceService::new(repository).create(request).await }.boxed()
            })
            .await
    }

    async fn update(
        &self,
        id: ResourceId,
        request: UpdateResourceRequest,
    ) -> Result<Resource, ResourceError> {
        self.unit_of_work
            .execute(move |repository| {
                async move { ResourceService::new(repository).update(id, request).await }.boxed()
            })
            .await
    }

    async fn delete(&self, id: ResourceId) -> Result<(), ResourceError> {
        self.unit_of_work
            .execute(move |repository| {
                async move { ResourceService::new(repository).delete(id).await }.boxed()
            })
            .await
    }
}

#[cfg(test)]
#[path = "resource_service_tests.rs"]
mod tests;
