//! Configuration loading and operator config views.

use std::fs;

use market_intel::application::market::NegativePricePolicy;
use market_intel::error::{ConfigError, Error};
use market_intel::infrastructure::config::llm::LlmProvider;
use market_intel::infrastructure::config::settings::Config;
use market_intel::infrastructure::operator::Operator;
use market_intel::port::inbound::operator::config::ConfigurationOperator;
use market_intel::port::inbound::operator::session::SessionOperator;
use tempfile::TempDir;

fn example_toml() -> String {
    fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example"))
        .expect("example config should be readable")
}

#[test]
fn example_config_is_valid_and_matches_defaults() {
    let config = Config::parse_toml(&example_toml()).unwrap();
    let defaults = Config::default();

    assert_eq!(config.llm.provider, defaults.llm.provider);
    assert_eq!(config.llm.model(), defaults.llm.model());
    assert_eq!(config.market.locked_delay_ms, defaults.market.locked_delay_ms);
    assert_eq!(config.market.own_brand_markers, defaults.market.own_brand_markers);
    assert_eq!(config.market.negative_prices, NegativePricePolicy::Unknown);
}

#[test]
fn load_reads_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[llm]\nprovider = \"openai\"\n").unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.llm.provider, LlmProvider::OpenAi);
    assert_eq!(config.llm.model(), "gpt-4o");
}

#[test]
fn load_missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();

    let result = Config::load(dir.path().join("absent.toml"));

    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn load_or_default_tolerates_missing_file() {
    let dir = TempDir::new().unwrap();

    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.market.locked_delay_ms, 800);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let result = Config::parse_toml("[market\nlocked_delay_ms = 1");
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn unknown_provider_is_rejected() {
    let result = Config::parse_toml("[llm]\nprovider = \"mistral\"\n");
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn zero_locked_delay_is_rejected() {
    let err = Config::parse_toml("[market]\nlocked_delay_ms = 0\n").unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue { field: "locked_delay_ms", .. })
    ));
}

#[test]
fn operator_show_config_projects_selected_provider() {
    let toml = "[llm]\nprovider = \"anthropic\"\n\n[llm.anthropic]\nmodel = \"claude-haiku-4-5\"\nweb_search = false\n";

    let view = Operator.show_config(toml).unwrap();

    assert_eq!(view.llm_provider, "anthropic");
    assert_eq!(view.llm_model, "claude-haiku-4-5");
    assert!(!view.web_search);
    assert_eq!(view.negative_prices, "unknown");
}

#[test]
fn operator_validate_warns_when_search_disabled() {
    let toml = "[llm.gemini]\nweb_search = false\n";

    let report = Operator.validate_config(toml).unwrap();

    assert!(report.warnings.iter().any(|w| w.contains("Web search disabled")));
}

#[test]
fn operator_validate_propagates_invalid_values() {
    let result = Operator.validate_config("[llm.gemini]\ntemperature = 3.5\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue { field: "temperature", .. }))
    ));
}

#[test]
fn open_session_rejects_invalid_file() {
    assert!(Operator.open_session(Some("[market]\nlocked_delay_ms = 0\n")).is_err());
}
