//! Inbound adapters translating external requests into driving-port calls.

pub mod http;
