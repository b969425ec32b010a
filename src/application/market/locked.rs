//! Locked, hand-curated competitor data for the Dallas-Fort Worth market.

use std::time::Duration;

use tracing::debug;

use crate::domain::{CompetitorRecord, GeographicFocus, Price};

/// Number of competitors in the locked DFW dataset.
pub const DFW_LOCKED_COUNT: usize = 15;

struct LockedRow {
    name: &'static str,
    focus: GeographicFocus,
    clinics: u32,
    dentists: u32,
    surgeons: u32,
    denture: Option<u32>,
    tier1_low: Option<u32>,
    tier1_high: Option<u32>,
}

fn row(
    name: &'static str,
    focus: GeographicFocus,
    counts: (u32, u32, u32),
    prices: (Option<u32>, Option<u32>, Option<u32>),
) -> LockedRow {
    LockedRow {
        name,
        focus,
        clinics: counts.0,
        dentists: counts.1,
        surgeons: counts.2,
        denture: prices.0,
        tier1_low: prices.1,
        tier1_high: prices.2,
    }
}

fn price(amount: Option<u32>) -> Price {
    amount.map_or(Price::Unknown, Price::whole)
}

/// The verified DFW competitive landscape, in display order.
#[must_use]
pub fn dfw_locks() -> Vec<CompetitorRecord> {
    use GeographicFocus::{Local, National, Regional};

    // (clinics, dentists, surgeons), (economy denture, tier 1 low, tier 1 high)
    let rows = [
        row("Ideal Dental (DECA)", National, (65, 136, 12), (Some(650), Some(1000), Some(1500))),
        row("Smile Brands", National, (51, 50, 8), (Some(650), Some(950), Some(1350))),
        row("Jefferson Dental", Regional, (35, 40, 6), (Some(550), Some(699), Some(1100))),
        row("Pacific Dental (PDS)", National, (35, 38, 10), (Some(700), Some(1100), Some(1600))),
        row("Heartland Dental", National, (30, 45, 8), (Some(1100), Some(1100), Some(1600))),
        row("AD&I/DDS", National, (22, 45, 6), (Some(499), Some(800), Some(1200))),
        row("Aspen Dental", National, (20, 19, 4), (Some(499), Some(1100), Some(1400))),
        row("Great Expressions", National, (8, 8, 2), (Some(850), Some(850), Some(1250))),
        row("Sage Dental", Regional, (6, 6, 1), (Some(800), Some(900), Some(1350))),
        row("Archpoint ID", Local, (3, 5, 2), (None, Some(1500), Some(3000))),
        row("ClearChoice", Local, (3, 3, 3), (None, None, None)),
        row("Texas Implant & Dental", Local, (2, 4, 1), (Some(895), Some(895), Some(1700))),
        row("Fast New Smile", Local, (2, 3, 3), (None, None, None)),
        row("Nuvia", Local, (2, 4, 4), (None, Some(2500), Some(3000))),
        row("New Choice Dentures", Local, (1, 3, 1), (Some(550), Some(795), Some(1500))),
    ];

    rows.into_iter()
        .filter_map(|r| {
            CompetitorRecord::try_new(r.name, r.focus).ok().map(|record| {
                record
                    .with_counts(r.clinics, r.dentists, r.surgeons)
                    .with_prices(price(r.denture), price(r.tier1_low), price(r.tier1_high))
            })
        })
        .collect()
}

/// Serves the locked dataset after a fixed delay.
///
/// The delay keeps the loading experience uniform with AI discovery; the
/// locked path never completes synchronously.
#[derive(Debug, Clone)]
pub struct LockedDataset {
    delay: Duration,
}

impl LockedDataset {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Wait out the configured delay, then return a fresh copy of the data.
    pub async fn load(&self) -> Vec<CompetitorRecord> {
        tokio::time::sleep(self.delay).await;
        let records = dfw_locks();
        debug!(count = records.len(), "Serving locked dataset");
        records
    }
}

impl Default for LockedDataset {
    fn default() -> Self {
        Self::new(Duration::from_millis(800))
    }
}
