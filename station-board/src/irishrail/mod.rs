//! Irish Rail realtime API client.
//!
//! This module provides an HTTP client for the realtime station data feed,
//! which reports the upcoming trains at a named station.
//!
//! Key characteristics of the feed:
//! - trains are listed soonest-first; the board logic relies on that order
//! - `dueIn` and `late` are whole minutes transported as strings, and
//!   `late` may be negative for a train running early
//! - a train terminating at the queried station still appears on that
//!   station's board; consumers must filter it out when listing departures

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{StationClient, StationClientConfig};
pub use convert::{ConvertError, convert_station_data, convert_train};
pub use error::ApiError;
pub use mock::MockStationClient;
pub use types::{StationBoard, StationDataResponse, TrainRecordDto};
