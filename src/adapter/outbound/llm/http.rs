//! HTTP helpers shared by the provider clients.

use crate::error::{Error, Result};

/// Turn a non-success HTTP reply into [`Error::Provider`], keeping the body.
pub(crate) async fn ensure_success(
    provider: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(Error::Provider {
        provider,
        status: status.as_u16(),
        message,
    })
}

/// Read the first non-blank environment variable among `names`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingField`](crate::error::ConfigError::MissingField)
/// naming the first variable when none is set.
pub fn env_key(names: &[&'static str]) -> Result<String> {
    names
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|v| !v.trim().is_empty()))
        .ok_or(Error::Config(crate::error::ConfigError::MissingField {
            field: names.first().copied().unwrap_or_default(),
        }))
}
