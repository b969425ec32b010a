//! Competitor deep-dive records.

use serde::Serialize;

/// Evidence text used when a deep-dive lookup produced nothing usable.
pub const UNAVAILABLE_EVIDENCE: &str = "Error fetching data or no public records found.";

/// Named personnel and a citation for one competitor in one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorDetail {
    #[serde(rename = "dsoName")]
    pub organization_name: String,
    pub dentist_names: Vec<String>,
    pub surgeon_names: Vec<String>,
    pub evidence_source: String,
}

impl CompetitorDetail {
    /// The record returned when the lookup failed or found no public records.
    #[must_use]
    pub fn unavailable(organization_name: impl Into<String>) -> Self {
        Self {
            organization_name: organization_name.into(),
            dentist_names: Vec::new(),
            surgeon_names: Vec::new(),
            evidence_source: UNAVAILABLE_EVIDENCE.to_string(),
        }
    }

    /// True when neither dentists nor surgeons were identified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dentist_names.is_empty() && self.surgeon_names.is_empty()
    }
}
