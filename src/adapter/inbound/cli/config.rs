//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::diagnostic::config_diagnostic;
use crate::adapter::inbound::cli::{operator, output};
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note("2. Set API_KEY (Gemini), OPENAI_API_KEY or ANTHROPIC_API_KEY");
    output::note(&format!(
        "3. Run: market-intel config validate -c {}",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config_toml = operator::read_optional_config_toml(path)?;
    let from_file = config_toml.is_some();
    let view = operator::operator().show_config(config_toml.as_deref().unwrap_or_default())?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "from_file": from_file,
            "config": view,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    if !from_file {
        output::note("(file not found, showing built-in defaults)");
    }

    output::section("Logging");
    output::field("Level", &view.log_level);
    output::field("Format", &view.log_format);

    output::section("LLM");
    output::field("Provider", &view.llm_provider);
    output::field("Model", &view.llm_model);
    output::field("Web search", if view.web_search { "on" } else { "off" });
    if view.api_key_loaded {
        output::success("API key loaded from environment");
    } else {
        output::warning("API key not set");
    }

    output::section("Market");
    output::field("Locked delay", format!("{}ms", view.locked_delay_ms));
    output::field("Own brand", view.own_brand_markers.join(", "));
    output::field("Negative prices", &view.negative_prices);

    Ok(())
}

/// Execute `config validate`.
///
/// Invalid files are reported as a rendered diagnostic before the error is
/// returned.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config_toml = operator::read_config_toml(path)?;

    let validation = match operator::operator().validate_config(&config_toml) {
        Ok(validation) => validation,
        Err(error) => {
            if !output::is_json() {
                let name = path.display().to_string();
                let report = miette::Report::new(config_diagnostic(&name, &config_toml, &error));
                eprintln!("{report:?}");
            }
            return Err(error);
        }
    };
    output::success("Config file is valid");

    if !validation.warnings.is_empty() {
        output::section("Warnings");
        for warning in &validation.warnings {
            output::warning(warning);
        }
    }

    output::hint(&format!("market-intel config show -c {}", path.display()));

    Ok(())
}
