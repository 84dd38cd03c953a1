//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! ports, so they can be exercised against mocks without I/O.

use std::sync::Arc;

use crate::domain::ports::{ResourcesCommand, ResourcesQuery};

/// Port implementations used by the resource handlers.
#[derive(Clone)]
pub struct HttpState {
    pub resources: Arc<dyn ResourcesCommand>,
    pub resources_query: Arc<dyn ResourcesQuery>,
}

impl HttpState {
    /// Bundle the command and query ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use roster::domain::ResourceUseCases;
    /// use roster::inbound::http::state::HttpState;
    /// use roster::test_support::InMemoryResourceStore;
    ///
    /// let use_cases = Arc::new(ResourceUseCases::new(Arc::new(InMemoryResourceStore::new())));
    /// let _state = HttpState::new(use_cases.clone(), use_cases);
    /// ```
    pub fn new(
        resources: Arc<dyn ResourcesCommand>,
        resources_query: Arc<dyn ResourcesQuery>,
    ) -> Self {
        Self {
            resources,
            resources_query,
        }
    }
}
