//! Handler for the `detail` command.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::command::DetailArgs;
use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;
use crate::port::inbound::market::MarketIntelligence;

/// Execute the detail command.
pub async fn execute(args: &DetailArgs, config_path: &Path) -> Result<()> {
    let config_toml = operator::read_optional_config_toml(config_path)?;
    let session = operator::operator().open_session(config_toml.as_deref())?;

    let pb = output::spinner(&format!("Searching public records for {}...", args.organization));
    let detail = session
        .market
        .fetch_detail(&args.region, &args.organization)
        .await;
    if detail.is_empty() {
        output::spinner_fail(&pb, "No named personnel found");
    } else {
        output::spinner_success(&pb, "Roster retrieved");
    }

    if output::is_json() {
        output::json_output(json!({
            "command": "detail",
            "region": args.region.trim(),
            "detail": detail,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Organization", &detail.organization_name);
    output::field("Region", args.region.trim());

    print_names("Dentists", &detail.dentist_names);
    print_names("Implant Surgeons", &detail.surgeon_names);

    output::section("Evidence");
    output::note(&detail.evidence_source);

    if !session.ai_available {
        output::hint("set API_KEY (or the key for your configured provider) to enable lookups");
    }
    Ok(())
}

fn print_names(title: &str, names: &[String]) {
    output::section(title);
    if names.is_empty() {
        output::note("(none found)");
        return;
    }
    for name in names {
        output::lines(&format!("- {name}"));
    }
}
