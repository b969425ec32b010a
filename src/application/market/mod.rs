//! Market-data use cases.
//!
//! [`MarketService`] picks between the locked dataset and AI discovery for
//! a region. [`MarketBoard`] sequences overlapping loads for one view.

pub mod board;
pub mod config;
pub mod discovery;
pub mod extract;
pub mod locked;
pub mod normalize;
pub mod prompt;
pub mod service;

pub use board::{BoardSnapshot, LoadTicket, MarketBoard};
pub use config::{MarketConfig, NegativePricePolicy};
pub use discovery::{parse_detail_response, parse_market_response, MarketDiscovery};
pub use extract::extract_payload;
pub use locked::{dfw_locks, LockedDataset, DFW_LOCKED_COUNT};
pub use normalize::{normalize_record, normalize_records};
pub use prompt::{competitor_detail_prompt, market_matrix_prompt, SYSTEM_INSTRUCTION};
pub use service::MarketService;
