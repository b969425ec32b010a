//! The in-memory result set behind the market report view.
//!
//! Each load takes a ticket carrying a monotonically increasing
//! generation. A completion is applied only if its generation is still the
//! latest issued, so a slow response for an old region can never overwrite
//! a newer one.

use parking_lot::Mutex;
use serde::Serialize;

use crate::domain::{select_data_source, CompetitorRecord, DataOrigin};

/// Proof that a load was started, used to apply its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub region: String,
    pub origin: DataOrigin,
}

/// Point-in-time copy of the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub generation: u64,
    pub region: Option<String>,
    pub origin: Option<DataOrigin>,
    pub records: Vec<CompetitorRecord>,
    pub loading: bool,
}

#[derive(Debug, Default)]
struct BoardState {
    issued: u64,
    applied: u64,
    region: Option<String>,
    origin: Option<DataOrigin>,
    records: Vec<CompetitorRecord>,
}

/// Holds the current competitor set for one consuming view.
#[derive(Debug, Default)]
pub struct MarketBoard {
    state: Mutex<BoardState>,
}

impl MarketBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load for `region`, superseding any load in flight.
    pub fn begin(&self, region: &str) -> LoadTicket {
        let mut state = self.state.lock();
        state.issued += 1;
        LoadTicket {
            generation: state.issued,
            region: region.to_string(),
            origin: select_data_source(region),
        }
    }

    /// Apply a finished load.
    ///
    /// The records replace the current set wholesale. Returns `false` and
    /// leaves the board untouched when a newer load has been started.
    pub fn complete(&self, ticket: &LoadTicket, records: Vec<CompetitorRecord>) -> bool {
        let mut state = self.state.lock();
        if ticket.generation != state.issued {
            return false;
        }
        state.applied = ticket.generation;
        state.region = Some(ticket.region.clone());
        state.origin = Some(ticket.origin);
        state.records = records;
        true
    }

    /// True while the latest issued load has not completed.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        let state = self.state.lock();
        state.applied != state.issued
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let state = self.state.lock();
        BoardSnapshot {
            generation: state.applied,
            region: state.region.clone(),
            origin: state.origin,
            records: state.records.clone(),
            loading: state.applied != state.issued,
        }
    }
}
