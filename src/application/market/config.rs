//! Market-data service configuration.

use serde::Deserialize;

/// How to treat negative prices other than the `-1` unknown marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativePricePolicy {
    /// Treat the price as unknown.
    #[default]
    Unknown,
    /// Drop the whole record.
    Reject,
}

/// Configuration for locked data and AI discovery.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    /// Delay before locked data is returned, in milliseconds.
    #[serde(default = "default_locked_delay_ms")]
    pub locked_delay_ms: u64,
    /// Name fragments that identify our own brand in a matrix.
    #[serde(default = "default_own_brand_markers")]
    pub own_brand_markers: Vec<String>,
    /// Policy for negative prices in discovered records.
    #[serde(default)]
    pub negative_prices: NegativePricePolicy,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            locked_delay_ms: default_locked_delay_ms(),
            own_brand_markers: default_own_brand_markers(),
            negative_prices: NegativePricePolicy::default(),
        }
    }
}

const fn default_locked_delay_ms() -> u64 {
    800
}

fn default_own_brand_markers() -> Vec<String> {
    vec!["AD&I".into(), "Affordable".into()]
}
