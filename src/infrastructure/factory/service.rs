//! Market service and Research Lab factory.

use crate::application::client::LlmHandle;
use crate::application::market::MarketService;
use crate::application::research::ResearchLab;
use crate::infrastructure::config::settings::Config;

use super::llm::build_llm_client;

/// Build the client handle shared by discovery and research.
pub fn build_llm_handle(config: &Config) -> LlmHandle {
    LlmHandle::new(build_llm_client(config))
}

/// Build the market service around `llm`.
pub fn build_market_service(config: &Config, llm: LlmHandle) -> MarketService {
    MarketService::from_config(&config.market, llm, config.llm.web_search())
}

/// Build an empty Research Lab conversation around `llm`.
pub fn build_research_lab(config: &Config, llm: LlmHandle) -> ResearchLab {
    ResearchLab::new(llm).with_web_search(config.llm.web_search())
}
