//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL repository and transaction executor using
//!   Diesel.

pub mod persistence;
