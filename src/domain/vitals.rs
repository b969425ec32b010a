//! Headline figures and views over a competitor set.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::competitor::CompetitorRecord;

/// Summary figures for a market matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketVitals {
    /// Number of competitors in the set.
    pub competitive_set: usize,
    /// Mean clinics per competitor, one decimal place.
    pub avg_clinics: Decimal,
    /// Total implant surgeons across the set.
    pub total_surgeons: u64,
    /// Mean known, non-zero economy-denture price.
    pub avg_economy_denture: Option<Decimal>,
}

impl MarketVitals {
    #[must_use]
    pub fn from_records(records: &[CompetitorRecord]) -> Self {
        let competitive_set = records.len();

        let avg_clinics = if records.is_empty() {
            Decimal::ZERO
        } else {
            let clinics: u64 = records.iter().map(|r| u64::from(r.clinic_count)).sum();
            (Decimal::from(clinics) / Decimal::from(competitive_set as u64))
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        };

        let total_surgeons = records.iter().map(|r| u64::from(r.surgeon_count)).sum();

        let prices: Vec<Decimal> = records
            .iter()
            .filter_map(|r| r.price_economy_denture.amount())
            .filter(|amount| *amount > Decimal::ZERO)
            .collect();
        let avg_economy_denture = if prices.is_empty() {
            None
        } else {
            let total: Decimal = prices.iter().sum();
            Some(
                (total / Decimal::from(prices.len() as u64))
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            )
        };

        Self {
            competitive_set,
            avg_clinics,
            total_surgeons,
            avg_economy_denture,
        }
    }
}

/// Records whose name contains `query`, ignoring case.
///
/// A blank query matches everything.
#[must_use]
pub fn filter_by_name<'a>(records: &'a [CompetitorRecord], query: &str) -> Vec<&'a CompetitorRecord> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|r| needle.is_empty() || r.organization_name().to_lowercase().contains(&needle))
        .collect()
}

/// True when the record's name contains any of the brand markers.
#[must_use]
pub fn is_own_brand(record: &CompetitorRecord, markers: &[String]) -> bool {
    markers
        .iter()
        .any(|marker| !marker.is_empty() && record.organization_name().contains(marker.as_str()))
}
