//! HTTP adapters - the service boundary.

pub mod analysis;
