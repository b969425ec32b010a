//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components
//! from application configuration.
//!
//! # Submodules
//!
//! - [`llm`] - LLM client construction
//! - [`service`] - Market service and Research Lab construction

pub mod llm;
pub mod service;
