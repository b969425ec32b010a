//! Path utilities for market-intel.
//!
//! All data lives under `~/.market-intel/`:
//! - `~/.market-intel/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the market-intel home directory (`~/.market-intel/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".market-intel")
}

/// Returns the default config file path (`~/.market-intel/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_under_home() {
        let config = default_config();

        assert!(config.starts_with(home_dir()));
        assert!(config.to_string_lossy().contains(".market-intel"));
        assert!(config.ends_with("config.toml"));
    }
}
