//! In-memory resource store standing in for PostgreSQL in tests.
//!
//! The store keeps an id-indexed map plus an email index behind a single
//! mutex. It implements [`UnitOfWork`] by serialising units of work and
//! restoring a snapshot when the work fails or is dropped, which mirrors
//! transaction rollback. Like a PostgreSQL sequence, the id counter is not
//! rolled back.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use tracing::debug;

use crate::domain::ports::{ResourceRepository, UnitOfWork, UnitOfWorkFuture};
use crate::domain::{
    CreateResourceRequest, Resource, ResourceError, ResourceId, UpdateResourceRequest,
};

#[derive(Debug, Clone, Default)]
struct Rows {
    by_id: BTreeMap<ResourceId, Resource>,
    by_email: HashMap<String, ResourceId>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: Rows,
    next_id: i64,
    fault: Option<String>,
}

impl Inner {
    fn check_fault(&self) -> Result<(), ResourceError> {
        match &self.fault {
            Some(cause) => Err(ResourceError::storage(cause.clone())),
            None => Ok(()),
        }
    }

    fn get(&self, id: ResourceId) -> Result<&Resource, ResourceError> {
        self.rows
            .by_id
            .get(&id)
            .ok_or_else(|| ResourceError::not_found(id))
    }

    /// Reject `email` when a row other than `owner` already holds it.
    fn check_email_free(&self, email: &str, owner: Option<ResourceId>) -> Result<(), ResourceError> {
        match self.rows.by_email.get(email) {
            Some(holder) if Some(*holder) != owner => Err(ResourceError::duplicate_key(email)),
            _ => Ok(()),
        }
    }
}

/// Shared handle to the in-memory store.
///
/// # Examples
/// ```
/// use roster::test_support::InMemoryResourceStore;
///
/// let store = InMemoryResourceStore::new();
/// assert!(store.is_empty());
/// ```
#[derive(Clone)]
pub struct InMemoryResourceStore {
    inner: Arc<Mutex<Inner>>,
    gate: Arc<tokio::sync::Mutex<()>>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryResourceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryResourceStore {
    /// Create an empty store stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Create an empty store stamped by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                next_id: 1,
                ..Inner::default()
            })),
            gate: Arc::new(tokio::sync::Mutex::new(())),
            clock,
        }
    }

    /// Repository operating directly on the store, outside any unit of work.
    pub fn repository(&self) -> InMemoryResourceRepository {
        InMemoryResourceRepository {
            store: self.clone(),
        }
    }

    /// Number of stored resources.
    pub fn len(&self) -> usize {
        self.lock().rows.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of stored resources holding `email`.
    pub fn count_with_email(&self, email: &str) -> usize {
        self.lock()
            .rows
            .by_id
            .values()
            .filter(|resource| resource.email == email)
            .count()
    }

    /// Make every subsequent repository call fail with a storage error.
    pub fn inject_storage_fault(&self, cause: impl Into<String>) {
        self.lock().fault = Some(cause.into());
    }

    pub fn clear_storage_fault(&self) {
        self.lock().fault = None;
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UnitOfWork for InMemoryResourceStore {
    async fn execute<T, F>(&self, work: F) -> Result<T, ResourceError>
    where
        T: Send + 'static,
        F: for<'r> FnOnce(&'r mut dyn ResourceRepository) -> UnitOfWorkFuture<'r, T>
            + Send
            + 'static,
    {
        let _serialised = self.gate.lock().await;
        let mut rollback = Rollback {
            store: self,
            snapshot: Some(self.lock().rows.clone()),
        };
        let mut repository = self.repository();

        let outcome = work(&mut repository).await;
        match &outcome {
            Ok(_) => rollback.commit(),
            Err(error) => debug!(%error, "rolling back in-memory unit of work"),
        }
        outcome
    }
}

/// Restores the pre-work rows on drop unless committed, so failed and
/// cancelled units of work both leave the store untouched.
struct Rollback<'s> {
    store: &'s InMemoryResourceStore,
    snapshot: Option<Rows>,
}

impl Rollback<'_> {
    fn commit(&mut self) {
        self.snapshot = None;
    }
}

impl Drop for Rollback<'_> {
    fn drop(&mut self) {
        if let Some(rows) = self.snapshot.take() {
            self.store.lock().rows = rows;
        }
    }
}

/// Repository over an [`InMemoryResourceStore`].
#[derive(Clone)]
pub struct InMemoryResourceRepository {
    store: InMemoryResourceStore,
}

#[async_trait]
impl ResourceRepository for InMemoryResourceRepository {
    async fn find_by_id(&mut self, id: ResourceId) -> Result<Resource, ResourceError> {
        let inner = self.store.lock();
        inner.check_fault()?;
        inner.get(id).cloned()
    }

    async fn find_all(&mut self) -> Result<Vec<Resource>, ResourceError> {
        let inner = self.store.lock();
        inner.check_fault()?;
        Ok(inner.rows.by_id.values().cloned().collect())
    }

    async fn find_by_email(&mut self, email: &str) -> Result<Option<Resource>, ResourceError> {
        let inner = self.store.lock();
        inner.check_fault()?;
        Ok(inner
            .rows
            .by_email
            .get(email)
            .and_then(|id| inner.rows.by_id.get(id))
            .cloned())
    }

    async fn create(
        &mut self,
        request: &CreateResourceRequest,
    ) -> Result<Resource, ResourceError> {
        let now = self.store.clock.utc();
        let mut inner = self.store.lock();
        inner.check_fault()?;
        inner.check_email_free(&request.email, None)?;

        let id = ResourceId::new(inner.next_id);
        inner.next_id += 1;
        let resource = Resource {
            id,
            name: request.name.clone(),
            email: request.email.clone(),
            age: request.age,
            created_at: now,
            updated_at: now,
        };
        inner.rows.by_email.insert(resource.email.clone(), id);
        inner.rows.by_id.insert(id, resource.clone());
        Ok(resource)
    }

    async fn update(
        &mut self,
        id: ResourceId,
        request: &UpdateResourceRequest,
    ) -> Result<Resource, ResourceError> {
        let now = self.store.clock.utc();
        let mut inner = self.store.lock();
        inner.check_fault()?;
        let existing = inner.get(id)?.clone();
        inner.check_email_free(&request.email, Some(id))?;

        let updated = Resource {
            id,
            name: request.name.clone(),
            email: request.email.clone(),
            age: request.age,
            created_at: existing.created_at,
            updated_at: now.max(existing.created_at),
        };
        inner.rows.by_email.remove(&existing.email);
        inner.rows.by_email.insert(updated.email.clone(), id);
        inner.rows.by_id.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete(&mut self, id: ResourceId) -> Result<(), ResourceError> {
        let mut inner = self.store.lock();
        inner.check_fault()?;
        let existing = inner.get(id)?.clone();
        inner.rows.by_email.remove(&existing.email);
        inner.rows.by_id.remove(&id);
        Ok(())
    }
}
