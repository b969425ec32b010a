//! Configuration projections for operator-facing adapters.

use serde::Serialize;

use crate::error::Result;

/// Effective configuration view for `config show`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    pub log_level: String,
    pub log_format: String,
    pub llm_provider: String,
    pub llm_model: String,
    pub web_search: bool,
    pub api_key_loaded: bool,
    pub locked_delay_ms: u64,
    pub own_brand_markers: Vec<String>,
    pub negative_prices: String,
}

/// Validation output for `config validate`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigValidationReport {
    pub warnings: Vec<String>,
}

/// Configuration use-cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Build a projection for `config show`.
    fn show_config(&self, config_toml: &str) -> Result<ConfigView>;

    /// Validate config and return non-fatal warnings.
    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport>;
}
