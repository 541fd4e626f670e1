//! Realtime HTTP client.
//!
//! One request per lookup: fetch a station's board, decode it, hand back
//! validated domain records. No caching, no retries - a failed fetch is the
//! caller's problem.

use tracing::debug;

use crate::domain::{StationName, TrainRecord};

use super::convert::convert_station_data;
use super::error::ApiError;
use super::types::StationDataResponse;

/// Default base URL for the realtime API.
const DEFAULT_BASE_URL: &str = "https://realtime.irishrail.ie/api";

/// Configuration for the realtime client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StationClientConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for StationClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the realtime station data API.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    base_url: String,
}

impl StationClient {
    /// Create a new realtime client.
    pub fn new(config: StationClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the live board for a station.
    ///
    /// Returns the station's upcoming trains in feed order (soonest first).
    /// The list includes trains terminating at the station; filtering those
    /// is the board logic's job, not the client's.
    pub async fn fetch_station(
        &self,
        station: &StationName,
    ) -> Result<Vec<TrainRecord>, ApiError> {
        let url = format!("{}/stationData", self.base_url);

        debug!(station = station.as_str(), "fetching station board");

        let response = self
            .http
            .get(&url)
            .query(&[("station", station.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::UnknownStation(station.as_str().to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let data: StationDataResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let trains = convert_station_data(&data)?;

        debug!(
            station = station.as_str(),
            trains = trains.len(),
            "decoded station board"
        );

        Ok(trains)
    }
}
