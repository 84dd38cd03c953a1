//! Shared helpers for roster integration tests.

use std::sync::Arc;

use roster::domain::ResourceUseCases;
use roster::inbound::http::state::HttpState;
use roster::test_support::InMemoryResourceStore;

/// HTTP state wired to the in-memory store through the real use cases.
pub fn http_state(store: &InMemoryResourceStore) -> HttpState {
    let use_cases = Arc::new(ResourceUseCases::new(Arc::new(store.clone())));
    HttpState::new(use_cases.clone(), use_cases)
}

/// Build the full application (middleware, routes, JSON config) over a store.
macro_rules! roster_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(crate::support::http_state(&$store)))
                .app_data(actix_web::web::Data::new(
                    roster::inbound::http::health::HealthState::new(),
                ))
                .wrap(roster::Trace)
                .configure(roster::inbound::http::configure),
        )
        .await
    };
}
