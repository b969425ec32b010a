//! Provider-agnostic market-intelligence types.
//!
//! - [`competitor`] - Competitor records and the derived staffing ratio
//! - [`price`] - Prices with an explicit unknown placeholder
//! - [`origin`] - Locked-versus-discovery source selection
//! - [`detail`] - Per-competitor deep-dive records
//! - [`vitals`] - Summary figures, name filtering, own-brand detection
//! - [`chat`] - Research Lab conversation messages

pub mod chat;
pub mod competitor;
pub mod detail;
pub mod error;
pub mod origin;
pub mod price;
pub mod vitals;

pub use chat::{ChatMessage, Role};
pub use competitor::{dentists_per_clinic, CompetitorRecord, GeographicFocus};
pub use detail::{CompetitorDetail, UNAVAILABLE_EVIDENCE};
pub use error::DomainError;
pub use origin::{select_data_source, DataOrigin};
pub use price::{Price, UNKNOWN_PRICE_LABEL};
pub use vitals::{filter_by_name, is_own_brand, MarketVitals};
