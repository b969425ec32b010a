//! Data-source selection for a market region.

use std::fmt;

use serde::Serialize;

/// Region substrings (lower case) that select the locked dataset.
const LOCKED_REGION_MARKERS: [&str; 2] = ["dallas", "dfw"];

/// Where a region's competitor data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    /// Pre-vetted, hand-curated records treated as ground truth.
    Locked,
    /// Estimates from a generative model grounded in web search.
    AiDiscovery,
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => f.write_str("locked"),
            Self::AiDiscovery => f.write_str("ai discovery"),
        }
    }
}

/// Decide the data origin for a free-text region label.
///
/// Plain substring containment on the lower-cased label; total over all
/// inputs, including the empty string.
#[must_use]
pub fn select_data_source(region: &str) -> DataOrigin {
    let normalized = region.to_lowercase();
    if LOCKED_REGION_MARKERS
        .iter()
        .any(|marker| normalized.contains(marker))
    {
        DataOrigin::Locked
    } else {
        DataOrigin::AiDiscovery
    }
}
