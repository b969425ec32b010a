//! Handler for the `matrix` command.

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::MatrixArgs;
use crate::adapter::inbound::cli::{operator, output};
use crate::application::market::MarketBoard;
use crate::domain::{
    filter_by_name, is_own_brand, select_data_source, CompetitorRecord, DataOrigin, MarketVitals,
    UNKNOWN_PRICE_LABEL,
};
use crate::error::Result;

/// Marker prefixed to our own brand's rows.
const OWN_BRAND_MARK: &str = "★";

#[derive(Tabled)]
struct CompetitorRow {
    #[tabled(rename = "Organization")]
    name: String,
    #[tabled(rename = "Focus")]
    focus: String,
    #[tabled(rename = "Clinics")]
    clinics: u32,
    #[tabled(rename = "Dentists")]
    dentists: u32,
    #[tabled(rename = "Dentists/Clinic")]
    ratio: String,
    #[tabled(rename = "Surgeons")]
    surgeons: u32,
    #[tabled(rename = "Denture")]
    denture: String,
    #[tabled(rename = "Tier 1 Low")]
    tier1_low: String,
    #[tabled(rename = "Tier 1 High")]
    tier1_high: String,
}

impl CompetitorRow {
    fn new(record: &CompetitorRecord, own_brand: bool) -> Self {
        let name = if own_brand {
            format!("{OWN_BRAND_MARK} {}", record.organization_name())
        } else {
            record.organization_name().to_string()
        };

        Self {
            name,
            focus: record.geographic_focus.to_string(),
            clinics: record.clinic_count,
            dentists: record.dentist_count,
            ratio: format!("{:.2}", record.dentists_per_clinic()),
            surgeons: record.surgeon_count,
            denture: record.price_economy_denture.to_string(),
            tier1_low: record.price_tier1_low.to_string(),
            tier1_high: record.price_tier1_high.to_string(),
        }
    }
}

/// Execute the matrix command.
pub async fn execute(args: &MatrixArgs, config_path: &std::path::Path) -> Result<()> {
    let config_toml = operator::read_optional_config_toml(config_path)?;
    let session = operator::operator().open_session(config_toml.as_deref())?;

    let region = args.region.trim();
    let pb = output::spinner(&match select_data_source(region) {
        DataOrigin::Locked => format!("Loading locked data for {region}..."),
        DataOrigin::AiDiscovery => format!("Discovering competitors in {region}..."),
    });

    let board = MarketBoard::new();
    session.market.refresh(&board, region).await;
    let snapshot = board.snapshot();
    let origin = snapshot.origin.unwrap_or_else(|| select_data_source(region));

    if snapshot.records.is_empty() {
        output::spinner_fail(&pb, "No records returned");
    } else {
        output::spinner_success(&pb, &format!("{} competitors loaded", snapshot.records.len()));
    }

    let records = filter_by_name(&snapshot.records, args.filter.as_deref().unwrap_or_default());
    let vitals = MarketVitals::from_records(&snapshot.records);

    if output::is_json() {
        output::json_output(json!({
            "command": "matrix",
            "region": region,
            "origin": origin,
            "vitals": vitals,
            "records": records,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Region", region);
    output::field("Source", output::highlight(origin));

    if snapshot.records.is_empty() {
        output::warning(&format!("No data available for {region}."));
        if !session.ai_available && origin == DataOrigin::AiDiscovery {
            output::hint("set API_KEY (or the key for your configured provider) to enable AI discovery");
        }
        return Ok(());
    }

    print_vitals(&vitals);

    output::section("Competitive Matrix");
    if records.is_empty() {
        output::note("(no organizations match the filter)");
        return Ok(());
    }
    let rows: Vec<CompetitorRow> = records
        .iter()
        .map(|r| CompetitorRow::new(r, is_own_brand(r, &session.own_brand_markers)))
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output::lines(&table.to_string());

    if args.pricing {
        print_pricing(&records);
    }

    if origin == DataOrigin::AiDiscovery {
        output::note("AI-estimated figures; verify before use.");
    }
    Ok(())
}

fn print_vitals(vitals: &MarketVitals) {
    output::section("Market Vitals");
    output::field("Competitors", vitals.competitive_set);
    output::field("Avg clinics", vitals.avg_clinics);
    output::field("Surgeons", vitals.total_surgeons);
    output::field(
        "Avg denture",
        vitals
            .avg_economy_denture
            .map_or_else(|| UNKNOWN_PRICE_LABEL.to_string(), |p| format!("${p}")),
    );
}

fn print_pricing(records: &[&CompetitorRecord]) {
    output::section("Pricing Architecture");
    for record in records {
        let points = record.price_points();
        if points.is_empty() {
            output::field(record.organization_name(), output::muted(UNKNOWN_PRICE_LABEL));
            continue;
        }
        let line = points
            .iter()
            .map(|(label, amount)| format!("{label} ${amount}"))
            .collect::<Vec<_>>()
            .join(", ");
        output::field(record.organization_name(), line);
    }
}
