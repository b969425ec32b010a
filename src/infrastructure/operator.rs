//! Operator implementation for inbound adapters.

use crate::adapter::outbound::llm::{anthropic, env_key, gemini, openai};
use crate::error::Result;
use crate::infrastructure::config::llm::LlmProvider;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::service::{
    build_llm_handle, build_market_service, build_research_lab,
};
use crate::port::inbound::operator::config::{
    ConfigValidationReport, ConfigView, ConfigurationOperator,
};
use crate::port::inbound::operator::session::{Session, SessionOperator};

/// Default operator backed by the TOML configuration and env keys.
#[derive(Debug, Default, Clone, Copy)]
pub struct Operator;

impl Operator {
    fn parse(config_toml: Option<&str>) -> Result<Config> {
        match config_toml {
            Some(content) => Config::parse_toml(content),
            None => Ok(Config::default()),
        }
    }
}

fn api_key_loaded(provider: LlmProvider) -> bool {
    let names: &[&'static str] = match provider {
        LlmProvider::Gemini => gemini::API_KEY_ENV,
        LlmProvider::OpenAi => &[openai::API_KEY_ENV],
        LlmProvider::Anthropic => &[anthropic::API_KEY_ENV],
    };
    env_key(names).is_ok()
}

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: &str) -> Result<ConfigView> {
        let config = Config::parse_toml(config_toml)?;

        Ok(ConfigView {
            log_level: config.logging.level.clone(),
            log_format: config.logging.format.clone(),
            llm_provider: config.llm.provider.as_str().to_string(),
            llm_model: config.llm.model().to_string(),
            web_search: config.llm.web_search(),
            api_key_loaded: api_key_loaded(config.llm.provider),
            locked_delay_ms: config.market.locked_delay_ms,
            own_brand_markers: config.market.own_brand_markers.clone(),
            negative_prices: format!("{:?}", config.market.negative_prices).to_lowercase(),
        })
    }

    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport> {
        let config = Config::parse_toml(config_toml)?;
        let mut warnings = Vec::new();

        if !api_key_loaded(config.llm.provider) {
            warnings.push(format!(
                "No API key set for {}; AI discovery and Research Lab are unavailable",
                config.llm.provider.as_str()
            ));
        }
        if !config.llm.web_search() {
            warnings.push("Web search disabled; discovery relies on model knowledge only".into());
        }
        if config.market.own_brand_markers.is_empty() {
            warnings.push("No own-brand markers configured".into());
        }

        Ok(ConfigValidationReport { warnings })
    }
}

impl SessionOperator for Operator {
    fn open_session(&self, config_toml: Option<&str>) -> Result<Session> {
        let config = Self::parse(config_toml)?;
        let llm = build_llm_handle(&config);
        let ai_available = llm.is_bound();

        Ok(Session {
            market: build_market_service(&config, llm.clone()),
            research: build_research_lab(&config, llm),
            own_brand_markers: config.market.own_brand_markers,
            ai_available,
        })
    }
}
