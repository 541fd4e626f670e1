//! Mock realtime client for testing without API access.
//!
//! Loads sample station boards from JSON files and serves them as if they
//! were live responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::domain::{StationName, TrainRecord};

use super::convert::convert_station_data;
use super::error::ApiError;
use super::types::StationDataResponse;

/// Mock realtime client that serves data from JSON files.
///
/// Useful for development and tests without hitting the live feed. Expects
/// files named `{Station}.json` (e.g. `Malahide.json`), each holding one
/// station data response.
#[derive(Clone)]
pub struct MockStationClient {
    /// Pre-loaded responses, keyed by station name.
    boards: Arc<HashMap<StationName, StationDataResponse>>,
}

impl MockStationClient {
    /// Create a mock client by loading JSON files from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, ApiError> {
        let data_dir = data_dir.as_ref();
        let mut boards = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| ApiError::Api {
            status: 0,
            message: format!("Failed to read mock data directory: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ApiError::Api {
                status: 0,
                message: format!("Failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            // Extract the station name from the filename
            // (e.g. "Malahide.json" -> "Malahide")
            let name_str =
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .ok_or_else(|| ApiError::Api {
                        status: 0,
                        message: format!("Invalid filename: {path:?}"),
                    })?;

            let station = StationName::parse(name_str).map_err(|_| ApiError::Api {
                status: 0,
                message: format!("Invalid station name in filename: {name_str}"),
            })?;

            let json = std::fs::read_to_string(&path).map_err(|e| ApiError::Api {
                status: 0,
                message: format!("Failed to read {path:?}: {e}"),
            })?;

            let board: StationDataResponse =
                serde_json::from_str(&json).map_err(|e| ApiError::Json {
                    message: format!("Failed to parse {path:?}: {e}"),
                    body: None,
                })?;

            boards.insert(station, board);
        }

        if boards.is_empty() {
            return Err(ApiError::Api {
                status: 0,
                message: format!("No mock board files found in {data_dir:?}"),
            });
        }

        Ok(Self {
            boards: Arc::new(boards),
        })
    }

    /// Fetch the board for a station.
    ///
    /// Mimics the real `StationClient::fetch_station` interface, including
    /// the unknown-station error for stations with no mock file.
    pub async fn fetch_station(
        &self,
        station: &StationName,
    ) -> Result<Vec<TrainRecord>, ApiError> {
        let board = self
            .boards
            .get(station)
            .ok_or_else(|| ApiError::UnknownStation(station.as_str().to_string()))?;

        Ok(convert_station_data(board)?)
    }

    /// List stations available in the mock data.
    pub fn available_stations(&self) -> Vec<StationName> {
        self.boards.keys().cloned().collect()
    }
}
