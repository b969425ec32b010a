//! LLM client factory.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::llm::anthropic::{self, Anthropic};
use crate::adapter::outbound::llm::env_key;
use crate::adapter::outbound::llm::gemini::{self, Gemini};
use crate::adapter::outbound::llm::openai::{self, OpenAi};
use crate::infrastructure::config::llm::LlmProvider;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::llm::Llm;

/// Build LLM client from configuration.
///
/// Returns `None` if the API key for the configured provider is missing.
/// Locked regions keep working without a client.
pub fn build_llm_client(config: &Config) -> Option<Arc<dyn Llm>> {
    let client: Arc<dyn Llm> = match config.llm.provider {
        LlmProvider::Gemini => {
            let api_key = api_key(gemini::API_KEY_ENV)?;
            let settings = &config.llm.gemini;
            Arc::new(Gemini::new(
                api_key,
                &settings.model,
                settings.max_tokens,
                settings.temperature,
            ))
        }
        LlmProvider::OpenAi => {
            let api_key = api_key(&[openai::API_KEY_ENV])?;
            let settings = &config.llm.openai;
            Arc::new(OpenAi::new(
                api_key,
                &settings.model,
                settings.max_tokens,
                settings.temperature,
            ))
        }
        LlmProvider::Anthropic => {
            let api_key = api_key(&[anthropic::API_KEY_ENV])?;
            let settings = &config.llm.anthropic;
            Arc::new(Anthropic::new(
                api_key,
                &settings.model,
                settings.max_tokens,
                settings.temperature,
            ))
        }
    };

    info!(provider = client.name(), model = client.model(), "LLM client initialized");
    Some(client)
}

/// First non-empty value among `names`, warning when none is set.
fn api_key(names: &[&'static str]) -> Option<String> {
    match env_key(names) {
        Ok(key) => Some(key),
        Err(_) => {
            warn!(
                vars = %names.join(" or "),
                "API key not set, AI discovery disabled"
            );
            None
        }
    }
}
