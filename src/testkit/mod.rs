//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`llm`] - Mock [`Llm`](crate::port::outbound::llm::Llm) implementations:
//!   `ScriptedLlm`, `FailingLlm`, `DelayedLlm`.
//! - [`domain`] - Builders for competitor records and model replies.

pub mod domain;
pub mod llm;
