//! Realtime client error types.

use std::fmt;

use super::convert::ConvertError;

/// Errors from the realtime HTTP client.
#[derive(Debug)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// The API does not know the requested station
    UnknownStation(String),

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Response decoded but a record failed domain validation
    Data(ConvertError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "HTTP error: {e}"),
            ApiError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            ApiError::UnknownStation(name) => write!(f, "unknown station: {name}"),
            ApiError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            ApiError::Data(e) => write!(f, "bad station data: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) => Some(e),
            ApiError::Data(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl From<ConvertError> for ApiError {
    fn from(err: ConvertError) -> Self {
        ApiError::Data(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ApiError::UnknownStation("Atlantis".into());
        assert_eq!(err.to_string(), "unknown station: Atlantis");

        let err = ApiError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = ApiError::Json {
            message: "expected string".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected string"));
    }

    #[test]
    fn data_error_display() {
        let err = ApiError::Data(ConvertError::NumericField {
            field: "late",
            value: "??".into(),
        });
        assert!(err.to_string().contains("bad station data"));
        assert!(err.to_string().contains("late"));
    }
}
