//! Market-intel - Competitive market intelligence for dental service organizations.
//!
//! Builds a competitor matrix for a geographic region: clinic, dentist and
//! implant-surgeon counts, dentists per clinic, and economy-tier prices.
//! Regions with a verified dataset (Dallas/DFW) are served from locked
//! records; every other region is discovered by a web-grounded generative
//! model and normalized into the same shape.
//!
//! # Architecture
//!
//! - **`domain`** - Competitor records, prices, data origin, market vitals
//! - **`port`** - Inbound use cases and the outbound `Llm` port
//! - **`application`** - Locked data, AI discovery, request sequencing,
//!   Research Lab conversation
//! - **`adapter`** - CLI (inbound) and Gemini/OpenAI/Anthropic clients (outbound)
//! - **`infrastructure`** - Configuration, factories, operator wiring
//!
//! # Features
//!
//! - `testkit` - Scripted model clients and record builders for tests
//! - `integration-tests` - Live-provider tests (require API keys)
//!
//! # Example
//!
//! ```no_run
//! use market_intel::application::client::LlmHandle;
//! use market_intel::infrastructure::config::settings::Config;
//! use market_intel::infrastructure::factory::service::build_market_service;
//! use market_intel::port::inbound::market::MarketIntelligence;
//!
//! # async fn run() -> market_intel::error::Result<()> {
//! let config = Config::default();
//! let market = build_market_service(&config, LlmHandle::unbound());
//! let load = market.load_market_data("Dallas DFW").await;
//! assert_eq!(load.records.len(), 15);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
