//! Builders for competitor records and model replies used across tests.

use crate::domain::{CompetitorRecord, GeographicFocus, Price};

/// Create a record with the given counts and no known prices.
pub fn record(name: &str, clinics: u32, dentists: u32) -> CompetitorRecord {
    CompetitorRecord::try_new(name, GeographicFocus::Regional)
        .expect("test record name must not be blank")
        .with_counts(clinics, dentists, 0)
}

/// Create a record with a known economy denture price.
pub fn priced_record(name: &str, denture: u32) -> CompetitorRecord {
    record(name, 1, 1).with_prices(Price::whole(denture), Price::Unknown, Price::Unknown)
}

/// A model reply listing one competitor as a fenced JSON array.
pub fn matrix_reply(name: &str, clinics: u32, dentists: u32) -> String {
    format!(
        "Here is the matrix:\n```json\n[{{\"dsoName\": \"{name}\", \"geographicFocus\": \"Regional\", \
         \"clinicCount\": {clinics}, \"dentistCount\": {dentists}, \"surgeonCount\": 0, \
         \"priceDenture\": -1, \"priceTier1Low\": -1, \"priceTier1High\": -1}}]\n```"
    )
}

/// A model reply for a roster lookup.
pub fn detail_reply(name: &str, dentists: &[&str], source: &str) -> String {
    serde_json::json!({
        "dsoName": name,
        "dentistNames": dentists,
        "surgeonNames": [],
        "evidenceSource": source,
    })
    .to_string()
}
