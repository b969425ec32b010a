//! Handler for the `source` command.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::domain::{select_data_source, DataOrigin};

/// Print which data source a region resolves to.
pub fn execute(region: &str) {
    let region = region.trim();
    let origin = select_data_source(region);

    if output::is_json() {
        output::json_output(json!({
            "command": "source",
            "region": region,
            "origin": origin,
        }));
        return;
    }

    output::field("Region", region);
    output::field("Source", output::highlight(origin));
    if output::verbosity() > 0 {
        let reason = match origin {
            DataOrigin::Locked => "region matches the verified Dallas/DFW dataset",
            DataOrigin::AiDiscovery => "no locked dataset; competitors are discovered by the model",
        };
        output::note(reason);
    }
}
