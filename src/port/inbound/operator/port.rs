//! Unified operator capability surface for inbound adapters.

use super::config::ConfigurationOperator;
use super::session::SessionOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort: ConfigurationOperator + SessionOperator {}

impl<T> OperatorPort for T where T: ConfigurationOperator + SessionOperator {}
