//! Command-line interface definitions.
//!
//! Defines the CLI structure for market-intel using `clap`. Subcommands
//! build the competitive matrix for a region, drill into one competitor,
//! run Research Lab questions, and manage configuration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Dental service organization market intelligence CLI
#[derive(Parser, Debug)]
#[command(name = "market-intel")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Apply this choice to all styled output.
    pub fn apply(&self) {
        match self {
            Self::Auto => owo_colors::unset_override(),
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

/// Top-level subcommands for the market-intel CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the competitive matrix for a region
    Matrix(MatrixArgs),

    /// Look up named dentists and surgeons for one competitor
    Detail(DetailArgs),

    /// Ask the Research Lab a single question
    Ask(AskArgs),

    /// Start an interactive Research Lab session
    Lab,

    /// Show which data source a region resolves to
    Source(SourceArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `market-intel config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for the `matrix` subcommand.
#[derive(Parser, Debug)]
pub struct MatrixArgs {
    /// Region to analyze (e.g. "Dallas DFW", "Austin").
    pub region: String,

    /// Only show organizations whose name contains this text.
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Also list each organization's known price points.
    #[arg(long)]
    pub pricing: bool,
}

/// Arguments for the `detail` subcommand.
#[derive(Parser, Debug)]
pub struct DetailArgs {
    /// Region the organization operates in.
    pub region: String,

    /// Organization name as shown in the matrix.
    pub organization: String,
}

/// Arguments for the `ask` subcommand.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// Question for the research analyst.
    pub question: String,
}

/// Arguments for the `source` subcommand.
#[derive(Parser, Debug)]
pub struct SourceArgs {
    /// Region to resolve.
    pub region: String,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "market-intel");
        assert!(cmd.get_version().is_some());
    }

    #[test]
    fn test_color_choice_default_is_auto() {
        assert!(matches!(ColorChoice::default(), ColorChoice::Auto));
    }

    #[test]
    fn test_parse_matrix_command() {
        let cli = Cli::try_parse_from(["market-intel", "matrix", "Dallas DFW"]).unwrap();
        if let Commands::Matrix(args) = cli.command {
            assert_eq!(args.region, "Dallas DFW");
            assert!(args.filter.is_none());
            assert!(!args.pricing);
        } else {
            panic!("Expected Matrix command");
        }
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_matrix_filter() {
        let cli =
            Cli::try_parse_from(["market-intel", "matrix", "Austin", "--filter", "aspen"]).unwrap();
        if let Commands::Matrix(args) = cli.command {
            assert_eq!(args.filter.as_deref(), Some("aspen"));
        } else {
            panic!("Expected Matrix command");
        }
    }

    #[test]
    fn test_parse_detail_command() {
        let cli =
            Cli::try_parse_from(["market-intel", "detail", "Austin", "Aspen Dental"]).unwrap();
        if let Commands::Detail(args) = cli.command {
            assert_eq!(args.region, "Austin");
            assert_eq!(args.organization, "Aspen Dental");
        } else {
            panic!("Expected Detail command");
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "market-intel",
            "source",
            "dfw",
            "--json",
            "-vv",
            "--config",
            "/tmp/custom.toml",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::try_parse_from(["market-intel", "lab"]).unwrap();
        assert_eq!(cli.config, paths::default_config());
        assert!(matches!(cli.command, Commands::Lab));
    }

    #[test]
    fn test_parse_config_init_force() {
        let cli = Cli::try_parse_from(["market-intel", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommand::Init(ConfigInitArgs { force: true }))
        ));
    }

    #[test]
    fn test_parse_color_never() {
        let cli = Cli::try_parse_from(["market-intel", "--color", "never", "lab"]).unwrap();
        assert!(matches!(cli.color, ColorChoice::Never));
    }

    #[test]
    fn test_missing_region_is_rejected() {
        assert!(Cli::try_parse_from(["market-intel", "matrix"]).is_err());
    }
}
