//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!   ┌──────────┐     │      Application        │     ┌────────────┐
//!   │   CLI    ├────►│  MarketService          ├────►│ Llm        │
//!   │ (inbound)│     │  ResearchLab            │     │ (outbound) │
//!   └──────────┘     └─────────────────────────┘     └────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::llm::Llm`] - Generative-model text generation
//! - [`inbound::market::MarketIntelligence`] - Market matrix and deep-dive use cases

pub mod inbound;
pub mod outbound;
