//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - the command-line interface driving the application.
//! - [`outbound`] - generative-model provider clients.

pub mod inbound;
pub mod outbound;
