//! Test utilities for the roster crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`, via
//! the `test-support` feature). Nothing here is compiled into release
//! builds.

mod clock;
mod in_memory;

pub use clock::{MutableClock, fixture_timestamp};
pub use in_memory::{InMemoryResourceRepository, InMemoryResourceStore};
