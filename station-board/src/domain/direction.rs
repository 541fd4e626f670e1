//! Direction label type.

use std::fmt;

/// Error returned when parsing an invalid direction label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction: {reason}")]
pub struct InvalidDirection {
    reason: &'static str,
}

/// A train's direction of travel as the feed labels it, e.g. "Northbound".
///
/// The set of directions a station serves is derived from its board, not
/// enumerated anywhere, so this stays an open-ended label rather than an
/// enum. Non-empty and trimmed by construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Direction(String);

impl Direction {
    /// Parse a direction label from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidDirection> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidDirection {
                reason: "must not be blank",
            });
        }

        Ok(Direction(trimmed.to_string()))
    }

    /// Returns the direction label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Direction({})", self.0)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
