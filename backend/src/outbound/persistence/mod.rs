//! PostgreSQL persistence adapters built on Diesel.
//!
//! Row structs and the table definition stay private to this module; only
//! the pool, the unit-of-work executor and the migration runner are exported.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use roster::outbound::persistence::{DbPool, DieselUnitOfWork, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/roster")).await?;
//! let unit_of_work = DieselUnitOfWork::new(pool, Duration::from_secs(30));
//! ```

mod diesel_resource_repository;
mod diesel_unit_of_work;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_resource_repository::{DieselResourceRepository, EMAIL_UNIQUE_CONSTRAINT};
pub use diesel_unit_of_work::DieselUnitOfWork;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
