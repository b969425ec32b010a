use clap::Parser;

use market_intel::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use market_intel::adapter::inbound::cli::output::{self, OutputConfig};
use market_intel::adapter::inbound::cli::{config, detail, matrix, operator, research, source};
use market_intel::error::Result;
use market_intel::infrastructure::config::settings::Config;
use market_intel::infrastructure::operator::Operator;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    cli.color.apply();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    init_logging(&cli);

    if operator::install(Box::new(Operator)).is_err() {
        output::error("operator already installed");
        std::process::exit(1);
    }

    if let Err(e) = run(&cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

/// Logging follows the config file when it loads; otherwise defaults apply
/// and the command itself reports the config problem.
fn init_logging(cli: &Cli) {
    let mut logging = Config::load_or_default(&cli.config)
        .map(|c| c.logging)
        .unwrap_or_default();
    match cli.verbose {
        0 if cli.quiet || cli.json => logging.level = "error".into(),
        0 => {}
        1 => logging.level = "debug".into(),
        _ => logging.level = "trace".into(),
    }
    logging.init();
}

async fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Matrix(args) => matrix::execute(args, &cli.config).await,
        Commands::Detail(args) => detail::execute(args, &cli.config).await,
        Commands::Ask(args) => research::execute_ask(&args.question, &cli.config).await,
        Commands::Lab => research::execute_lab(&cli.config).await,
        Commands::Source(args) => {
            source::execute(&args.region);
            Ok(())
        }
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&cli.config, args.force),
        Commands::Config(ConfigCommand::Show) => config::execute_show(&cli.config),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(&cli.config),
    }
}
