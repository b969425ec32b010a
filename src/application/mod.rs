//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.

pub mod client;
pub mod market;
pub mod research;

pub use client::LlmHandle;
pub use market::{MarketBoard, MarketService};
pub use research::ResearchLab;
