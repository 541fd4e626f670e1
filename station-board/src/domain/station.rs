//! Station name type.

use std::fmt;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// A validated station name.
///
/// The realtime feed identifies stations by their human-readable name
/// (e.g. "Malahide"), and the same names appear as train destinations.
/// This type guarantees the name is non-empty and carries no surrounding
/// whitespace, so comparing a destination against the queried station is
/// plain equality.
///
/// # Examples
///
/// ```
/// use station_board::domain::StationName;
///
/// let malahide = StationName::parse("Malahide").unwrap();
/// assert_eq!(malahide.as_str(), "Malahide");
///
/// // Surrounding whitespace is stripped
/// assert_eq!(StationName::parse(" Malahide ").unwrap().as_str(), "Malahide");
///
/// // Blank names are rejected
/// assert!(StationName::parse("").is_err());
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name from a string.
    ///
    /// The input is trimmed; the result must be non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationName {
                reason: "must not be blank",
            });
        }

        Ok(StationName(trimmed.to_string()))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
