//! Validated train record.

use super::{Direction, Minutes, StationName};

/// A single upcoming train on a station's board.
///
/// Constructed by the API boundary's convert step, so every field is already
/// validated: labels are non-blank and the minute fields are parsed numbers.
/// Records are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainRecord {
    /// Where the train is heading.
    pub destination: StationName,
    /// Direction label the feed assigns, e.g. "Northbound".
    pub direction: Direction,
    /// Minutes until scheduled arrival, before any delay.
    pub due_in: Minutes,
    /// Signed delay in minutes; negative means running early.
    pub late: Minutes,
}

impl TrainRecord {
    /// True when this train terminates at `station`.
    ///
    /// A terminating train is an inbound service and does not count as an
    /// outbound departure from that station's perspective.
    pub fn terminates_at(&self, station: &StationName) -> bool {
        &self.destination == station
    }

    /// Minutes until arrival with the delay applied.
    pub fn actual_due(&self) -> Minutes {
        self.due_in + self.late
    }
}
