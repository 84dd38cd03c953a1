//! Transaction executor over the shared Diesel pool.
//!
//! Each [`UnitOfWork::execute`] call checks one connection out, opens a
//! transaction, runs the work against a [`DieselResourceRepository`] bound to
//! that connection, and commits on `Ok` or rolls back on `Err`. The whole
//! sequence, checkout included, runs under a deadline. When the deadline
//! fires the in-flight future is dropped; the pooled connection is then
//! discarded by the pool because its transaction is still open, and
//! PostgreSQL rolls the transaction back when the session ends.

use std::time::Duration;

use async_trait::async_trait;
use diesel_async::AsyncConnection;
use diesel_async::scoped_futures::ScopedFutureExt;
use tracing::{debug, warn};

use crate::domain::ResourceError;
use crate::domain::ports::{ResourceRepository, UnitOfWork, UnitOfWorkFuture};

use super::diesel_resource_repository::DieselResourceRepository;
use super::pool::DbPool;

/// Why a transaction ended without committing.
#[derive(Debug)]
enum TransactionFailure {
    /// The work returned a domain error.
    Domain(ResourceError),
    /// Diesel failed to begin, commit or roll back.
    Storage(diesel::result::Error),
}

impl From<diesel::result::Error> for TransactionFailure {
    fn from(error: diesel::result::Error) -> Self {
        Self::Storage(error)
    }
}

impl From<TransactionFailure> for ResourceError {
    fn from(failure: TransactionFailure) -> Self {
        match failure {
            TransactionFailure::Domain(error) => error,
            TransactionFailure::Storage(error) => ResourceError::storage(error.to_string()),
        }
    }
}

/// [`UnitOfWork`] backed by a PostgreSQL transaction.
#[derive(Clone)]
pub struct DieselUnitOfWork {
    pool: DbPool,
    deadline: Duration,
}

impl DieselUnitOfWork {
    /// Create an executor whose units of work are aborted after `deadline`.
    pub fn new(pool: DbPool, deadline: Duration) -> Self {
        Self { pool, deadline }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    async fn run<T, F>(&self, work: F) -> Result<T, ResourceError>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r mut dyn ResourceRepository) -> UnitOfWorkFuture<'r, T>
            + Send
            + 'static,
    {
        let mut conn = self.pool.get().await?;
        let outcome = conn
            .transaction(|conn| {
                async move {
                    let mut repository = DieselResourceRepository::new(conn);
                    work(&mut repository)
                        .await
                        .map_err(TransactionFailure::Domain)
                }
                .scope_boxed()
            })
            .await;

        match outcome {
            Ok(value) => Ok(value),
            Err(TransactionFailure::Domain(error)) => {
                debug!(code = error.code().as_str(), "unit of work rolled back");
                Err(error)
            }
            Err(failure @ TransactionFailure::Storage(_)) => {
                let error = ResourceError::from(failure);
                warn!(%error, "transaction failed");
                Err(error)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for DieselUnitOfWork {
    async fn execute<T, F>(&self, work: F) -> Result<T, ResourceError>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r mut dyn ResourceRepository) -> UnitOfWorkFuture<'r, T>
            + Send
            + 'static,
    {
        match tokio::time::timeout(self.deadline, self.run(work)).await {
            Ok(outcome) => outcome,
            Err(_elapsed) => {
                warn!(
                    deadline_secs = self.deadline.as_secs_f64(),
                    "unit of work exceeded its deadline"
                );
                Err(ResourceError::storage("unit of work exceeded its deadline"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode, ResourceId};
    use rstest::rstest;

    #[rstest]
    fn domain_failures_pass_through_unchanged() {
        let error = ResourceError::not_found(ResourceId::new(3));

        let mapped = ResourceError::from(TransactionFailure::Domain(error.clone()));

        assert_eq!(mapped, error);
    }

    #[rstest]
    fn diesel_failures_become_storage_errors() {
        let failure = TransactionFailure::from(diesel::result::Error::BrokenTransactionManager);

        let mapped = ResourceError::from(failure);

        assert_eq!(mapped.code(), ErrorCode::InternalError);
    }
}
