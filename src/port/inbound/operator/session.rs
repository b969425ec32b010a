//! Wiring of application services for one CLI invocation.

use crate::application::market::MarketService;
use crate::application::research::ResearchLab;
use crate::error::Result;

/// Services and settings for one run of the command-line adapter.
#[derive(Debug)]
pub struct Session {
    pub market: MarketService,
    pub research: ResearchLab,
    /// Name fragments marking our own brand in a matrix.
    pub own_brand_markers: Vec<String>,
    /// False when no provider key was found; locked regions still work.
    pub ai_available: bool,
}

/// Session construction for operator-facing adapters.
pub trait SessionOperator: Send + Sync {
    /// Build services from config TOML, or from defaults when `None`.
    fn open_session(&self, config_toml: Option<&str>) -> Result<Session>;
}
