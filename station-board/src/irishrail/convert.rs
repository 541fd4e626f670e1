//! Conversion from wire DTOs to domain types.
//!
//! This is the single validating step between the feed's
//! stringly-typed records and the domain model. A record that fails here
//! fails the whole response: a malformed field means the upstream data shape
//! changed, not that one train is bad.

use crate::domain::{Direction, Minutes, StationName, TrainRecord};

use super::types::{StationDataResponse, TrainRecordDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConvertError {
    /// A minute field did not hold a numeric string
    #[error("field {field} is not numeric: {value:?}")]
    NumericField {
        field: &'static str,
        value: String,
    },

    /// Destination is not a usable station name
    #[error("invalid destination: {0:?}")]
    InvalidDestination(String),

    /// Direction label is blank
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),
}

/// Convert a station data response into domain records.
///
/// Board order is preserved: the feed lists trains soonest first and the
/// selection logic depends on that ordering.
pub fn convert_station_data(
    response: &StationDataResponse,
) -> Result<Vec<TrainRecord>, ConvertError> {
    response.station.trains.iter().map(convert_train).collect()
}

/// Convert a single wire record.
pub fn convert_train(dto: &TrainRecordDto) -> Result<TrainRecord, ConvertError> {
    let destination = StationName::parse(&dto.destination)
        .map_err(|_| ConvertError::InvalidDestination(dto.destination.clone()))?;

    let direction = Direction::parse(&dto.direction)
        .map_err(|_| ConvertError::InvalidDirection(dto.direction.clone()))?;

    let due_in = Minutes::parse(&dto.due_in).map_err(|_| ConvertError::NumericField {
        field: "dueIn",
        value: dto.due_in.clone(),
    })?;

    let late = Minutes::parse(&dto.late).map_err(|_| ConvertError::NumericField {
        field: "late",
        value: dto.late.clone(),
    })?;

    Ok(TrainRecord {
        destination,
        direction,
        due_in,
        late,
    })
}
