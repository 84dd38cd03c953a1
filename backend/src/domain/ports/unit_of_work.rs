//! Port for running work inside a single atomic storage transaction.

use async_trait::async_trait;
use futures_util::future::BoxFuture;

use crate::domain::ResourceError;

use super::ResourceRepository;

/// Future returned by work executed inside a unit of work.
pub type UnitOfWorkFuture<'r, T> = BoxFuture<'r, Result<T, ResourceError>>;

/// Executes one piece of work against a repository bound to a fresh
/// transaction.
///
/// Implementations acquire a connection, open a transaction, hand a
/// repository over that connection to `work`, then commit when `work`
/// returns `Ok` and roll back otherwise. The connection is released on every
/// exit path, including cancellation. Faults raised by the executor itself
/// (checkout failure, deadline expiry, commit failure) are reported as
/// [`ResourceError::Storage`].
///
/// # Examples
/// ```no_run
/// use futures_util::FutureExt;
/// use roster::domain::ports::UnitOfWork;
/// use roster::domain::{ResourceError, ResourceId};
///
/// async fn exists(uow: &impl UnitOfWork, id: ResourceId) -> Result<bool, ResourceError> {
///     uow.execute(move |repository| {
///         async move {
///             match repository.find_by_id(id).await {
///                 Ok(_) => Ok(true),
///                 Err(ResourceError::NotFound { .. }) => Ok(false),
///                 Err(other) => Err(other),
///             }
///         }
///         .boxed()
///     })
///     .await
/// }
/// ```
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Run `work` atomically.
    async fn execute<T, F>(&self, work: F) -> Result<T, ResourceError>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r mut dyn ResourceRepository) -> UnitOfWorkFuture<'r, T>
            + Send
            + 'static;
}
