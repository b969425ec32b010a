//! Operator-facing use cases for the command-line adapter.

pub mod config;
pub mod port;
pub mod session;
