//! Adapters - implementations of the ports.

pub mod analysis;
pub mod document;
pub mod fetch;
pub mod http;
