//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; API keys come from the
//! environment and are never read from the file.
//!
//! # Example
//!
//! ```no_run
//! use market_intel::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::llm::LlmConfig;
use super::logging::LoggingConfig;
use crate::application::market::MarketConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section is optional; an empty file yields the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// LLM provider configuration for discovery and research.
    #[serde(default)]
    pub llm: LlmConfig,

    /// Locked data and discovery settings.
    #[serde(default)]
    pub market: MarketConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., a temperature out of range)
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load the file if it exists, otherwise use the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or is invalid.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// Checks that values are within acceptable ranges.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        let providers = [
            (
                "llm.gemini",
                self.llm.gemini.model.as_str(),
                self.llm.gemini.temperature,
                self.llm.gemini.max_tokens,
            ),
            (
                "llm.openai",
                self.llm.openai.model.as_str(),
                self.llm.openai.temperature,
                self.llm.openai.max_tokens,
            ),
            (
                "llm.anthropic",
                self.llm.anthropic.model.as_str(),
                self.llm.anthropic.temperature,
                self.llm.anthropic.max_tokens,
            ),
        ];

        for (section, model, temperature, max_tokens) in providers {
            if model.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "model",
                    reason: format!("{section}.model must not be empty"),
                }
                .into());
            }
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ConfigError::InvalidValue {
                    field: "temperature",
                    reason: format!("{section}.temperature must be between 0 and 2"),
                }
                .into());
            }
            if max_tokens == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "max_tokens",
                    reason: format!("{section}.max_tokens must be greater than 0"),
                }
                .into());
            }
        }

        if self.market.locked_delay_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "locked_delay_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.market.own_brand_markers.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "own_brand_markers",
                reason: "markers must not be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::market::NegativePricePolicy;
    use crate::error::Error;
    use crate::infrastructure::config::llm::LlmProvider;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.llm.provider, LlmProvider::Gemini);
        assert_eq!(config.llm.model(), "gemini-2.5-flash");
        assert!(config.llm.web_search());
        assert_eq!(config.market.locked_delay_ms, 800);
        assert_eq!(config.market.own_brand_markers, ["AD&I", "Affordable"]);
        assert_eq!(config.market.negative_prices, NegativePricePolicy::Unknown);
    }

    #[test]
    fn parses_all_sections() {
        let toml = r#"
            [logging]
            level = "debug"
            format = "json"

            [llm]
            provider = "anthropic"

            [llm.anthropic]
            model = "claude-haiku-4-5"
            web_search = false

            [market]
            locked_delay_ms = 250
            own_brand_markers = ["Acme"]
            negative_prices = "reject"
        "#;

        let config = Config::parse_toml(toml).unwrap();

        assert_eq!(config.logging.format, "json");
        assert_eq!(config.llm.provider, LlmProvider::Anthropic);
        assert_eq!(config.llm.model(), "claude-haiku-4-5");
        assert!(!config.llm.web_search());
        assert_eq!(config.llm.anthropic.max_tokens, 4096);
        assert_eq!(config.market.locked_delay_ms, 250);
        assert_eq!(config.market.negative_prices, NegativePricePolicy::Reject);
    }

    #[test]
    fn rejects_zero_delay() {
        let err = Config::parse_toml("[market]\nlocked_delay_ms = 0").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "locked_delay_ms",
                ..
            })
        ));
    }

    #[test]
    fn rejects_temperature_out_of_range() {
        let err = Config::parse_toml("[llm.openai]\ntemperature = 2.5").unwrap_err();
        assert!(err.to_string().contains("llm.openai.temperature"));
    }

    #[test]
    fn rejects_empty_model_and_zero_tokens() {
        assert!(Config::parse_toml("[llm.gemini]\nmodel = \" \"").is_err());
        assert!(Config::parse_toml("[llm.gemini]\nmax_tokens = 0").is_err());
    }

    #[test]
    fn rejects_unknown_provider() {
        let err = Config::parse_toml("[llm]\nprovider = \"mistral\"").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default("/nonexistent/market-intel/config.toml").unwrap();
        assert_eq!(config.market.locked_delay_ms, 800);
    }
}
