//! Market-data entry point: source selection and dispatch.

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use super::board::MarketBoard;
use super::config::MarketConfig;
use super::discovery::MarketDiscovery;
use super::locked::LockedDataset;
use crate::application::client::LlmHandle;
use crate::domain::{select_data_source, CompetitorDetail, DataOrigin};
use crate::port::inbound::market::{MarketIntelligence, MarketLoad};

/// Serves locked data where it exists and AI discovery everywhere else.
#[derive(Debug, Clone)]
pub struct MarketService {
    locked: LockedDataset,
    discovery: MarketDiscovery,
}

impl MarketService {
    #[must_use]
    pub fn new(locked: LockedDataset, discovery: MarketDiscovery) -> Self {
        Self { locked, discovery }
    }

    /// Build the service from configuration around a shared client handle.
    #[must_use]
    pub fn from_config(config: &MarketConfig, llm: LlmHandle, web_search: bool) -> Self {
        Self::new(
            LockedDataset::new(Duration::from_millis(config.locked_delay_ms)),
            MarketDiscovery::new(llm, config.negative_prices).with_web_search(web_search),
        )
    }

    #[must_use]
    pub fn discovery(&self) -> &MarketDiscovery {
        &self.discovery
    }

    /// Load `region` into `board`, discarding the result if superseded.
    ///
    /// Returns whether this load's records were applied.
    pub async fn refresh(&self, board: &MarketBoard, region: &str) -> bool {
        let ticket = board.begin(region.trim());
        let load = self.load_market_data(&ticket.region).await;
        let applied = board.complete(&ticket, load.records);
        if !applied {
            info!(region = %ticket.region, generation = ticket.generation, "Discarding superseded market load");
        }
        applied
    }
}

#[async_trait]
impl MarketIntelligence for MarketService {
    async fn load_market_data(&self, region: &str) -> MarketLoad {
        let region = region.trim();
        let origin = select_data_source(region);
        info!(region, %origin, "Loading market data");

        let records = match origin {
            DataOrigin::Locked => self.locked.load().await,
            DataOrigin::AiDiscovery => self.discovery.discover_market(region).await,
        };

        MarketLoad {
            region: region.to_string(),
            origin,
            records,
        }
    }

    async fn fetch_detail(&self, region: &str, organization_name: &str) -> CompetitorDetail {
        self.discovery
            .fetch_detail(region.trim(), organization_name.trim())
            .await
    }
}
