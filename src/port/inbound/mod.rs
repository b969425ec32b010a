//! Inbound ports: use cases the application exposes to drivers.

pub mod market;
pub mod operator;
