//! Miette-based error diagnostics for CLI error presentation.
//!
//! Renders configuration failures with the offending file content, a
//! labeled span, and a help suggestion.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(market_intel::config))]
pub struct ConfigError {
    /// Human-readable error message.
    pub message: String,

    /// Source content (the configuration file).
    #[source_code]
    pub src: NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigError {
    /// Create a new configuration error with source location.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        name: impl AsRef<str>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: NamedSource::new(name, src.into()),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Locate a config problem in `src` and wrap it as a diagnostic.
///
/// TOML syntax errors carry their own span. Validation errors point at the
/// first line mentioning the offending key, or at the start of the file.
#[must_use]
pub fn config_diagnostic(name: &str, src: &str, error: &crate::error::Error) -> ConfigError {
    use crate::error::{ConfigError as Cause, Error};

    match error {
        Error::Config(Cause::Parse(parse)) => {
            let (offset, len) = parse
                .span()
                .map_or((0, 0), |span| (span.start, span.end.saturating_sub(span.start)));
            ConfigError::new(parse.message().trim(), name, src, offset, len)
                .with_help("check the TOML syntax and value types")
        }
        Error::Config(Cause::InvalidValue { field, reason }) => {
            let (offset, len) = find_key(src, field).unwrap_or((0, 0));
            ConfigError::new(format!("invalid value for {field}: {reason}"), name, src, offset, len)
                .with_help("see `market-intel config init` for a documented template")
        }
        other => ConfigError::new(other.to_string(), name, src, 0, 0),
    }
}

/// Byte span of the first `key =` assignment in `src`.
fn find_key(src: &str, key: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                let start = offset + (line.len() - trimmed.len());
                return Some((start, line.trim_end().len() - (line.len() - trimmed.len())));
            }
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError as Cause, Error};

    #[test]
    fn finds_key_span() {
        let src = "[market]\n  locked_delay_ms = 0\n";
        let (offset, len) = find_key(src, "locked_delay_ms").unwrap();

        assert_eq!(&src[offset..offset + len], "locked_delay_ms = 0");
    }

    #[test]
    fn ignores_keys_with_same_prefix() {
        assert!(find_key("model_name = \"x\"\n", "model").is_none());
    }

    #[test]
    fn invalid_value_points_at_key() {
        let src = "[market]\nlocked_delay_ms = 0\n";
        let error = Error::Config(Cause::InvalidValue {
            field: "locked_delay_ms",
            reason: "must be greater than 0".into(),
        });

        let diagnostic = config_diagnostic("config.toml", src, &error);

        assert_eq!(diagnostic.span.offset(), 9);
        assert!(diagnostic.message.contains("locked_delay_ms"));
        assert!(diagnostic.help.is_some());
    }

    #[test]
    fn parse_error_keeps_toml_span() {
        let src = "[market\n";
        let parse = toml::from_str::<toml::Value>(src).unwrap_err();
        let error = Error::Config(Cause::Parse(parse));

        let diagnostic = config_diagnostic("config.toml", src, &error);

        assert!(diagnostic.span.offset() <= src.len());
        assert!(!diagnostic.message.is_empty());
    }
}
