//! Domain ports for the hexagonal boundary.
//!
//! Driven ports ([`ResourceRepository`], [`UnitOfWork`]) are implemented by
//! outbound adapters; driving ports ([`ResourcesQuery`], [`ResourcesCommand`])
//! are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod resource_repository;
mod resources_command;
mod resources_query;
mod unit_of_work;

#[cfg(test)]
pub use resource_repository::MockResourceRepository;
pub use resource_repository::ResourceRepository;
#[cfg(test)]
pub use resources_command::MockResourcesCommand;
pub use resources_command::ResourcesCommand;
#[cfg(test)]
pub use resources_query::MockResourcesQuery;
pub use resources_query::ResourcesQuery;
pub use unit_of_work::{UnitOfWork, UnitOfWorkFuture};
