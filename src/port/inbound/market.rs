//! Market-intelligence use cases exposed to the presentation layer.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{CompetitorDetail, CompetitorRecord, DataOrigin};

/// The outcome of one market-data load.
///
/// An empty `records` list means either "no competitors found" or "the
/// discovery request failed"; the two are deliberately indistinguishable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketLoad {
    pub region: String,
    pub origin: DataOrigin,
    pub records: Vec<CompetitorRecord>,
}

/// Entry points for the market matrix and competitor deep-dive views.
///
/// None of these operations fail: discovery problems degrade to empty
/// results, logged at the boundary.
#[async_trait]
pub trait MarketIntelligence: Send + Sync {
    /// Load the competitor set for a region, dispatching on its data origin.
    async fn load_market_data(&self, region: &str) -> MarketLoad;

    /// Look up named personnel and evidence for one competitor.
    async fn fetch_detail(&self, region: &str, organization_name: &str) -> CompetitorDetail;
}
