//! Realtime API response DTOs.
//!
//! These types map directly to the JSON the station data endpoint returns.
//! All four train fields are mandatory on the wire; a record missing any of
//! them fails the decode rather than deferring to first access. `dueIn` and
//! `late` carry numbers as strings and are parsed during conversion.

use serde::Deserialize;

/// Response from the station data endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDataResponse {
    /// The queried station's board.
    pub station: StationBoard,
}

/// One station's departure board.
///
/// Minimal DTO - the board carries more fields upstream but the trains list
/// is all we consume.
#[derive(Debug, Clone, Deserialize)]
pub struct StationBoard {
    /// Upcoming trains, soonest first as ordered by the feed.
    pub trains: Vec<TrainRecordDto>,
}

/// A train entry as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainRecordDto {
    /// Destination station name.
    pub destination: String,

    /// Direction label, e.g. "Northbound".
    pub direction: String,

    /// Minutes until scheduled arrival, as a numeric string.
    pub due_in: String,

    /// Delay in minutes, as a numeric string. May be negative.
    pub late: String,
}
