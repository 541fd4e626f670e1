//! Minute arithmetic for arrival estimates.
//!
//! The realtime feed expresses everything in whole minutes relative to now:
//! `dueIn` is the scheduled wait and `late` is a signed delay to add to it.
//! Both arrive as numeric strings on the wire.

use std::fmt;
use std::ops::Add;

/// Error returned when parsing an invalid minute string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid minutes: {reason}")]
pub struct InvalidMinutes {
    reason: &'static str,
}

/// A signed count of minutes.
///
/// Delays can be negative (a train running early), so arithmetic is plain
/// signed addition with no clamping or special-casing.
///
/// # Examples
///
/// ```
/// use station_board::domain::Minutes;
///
/// let due = Minutes::parse("5").unwrap();
/// let late = Minutes::parse("-1").unwrap();
/// assert_eq!(due + late, Minutes::new(4));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Minutes(i64);

impl Minutes {
    /// Create a minute count from a raw value.
    pub const fn new(n: i64) -> Self {
        Minutes(n)
    }

    /// Parse a minute count from a numeric string.
    ///
    /// Accepts an optional sign and surrounding whitespace, the way the
    /// feed actually formats these fields.
    pub fn parse(s: &str) -> Result<Self, InvalidMinutes> {
        s.trim().parse::<i64>().map(Minutes).map_err(|_| InvalidMinutes {
            reason: "not a whole number of minutes",
        })
    }

    /// Returns the raw minute count.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Add for Minutes {
    type Output = Minutes;

    fn add(self, rhs: Minutes) -> Minutes {
        Minutes(self.0 + rhs.0)
    }
}

impl fmt::Debug for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Minutes({})", self.0)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: any i64 survives format then parse
        #[test]
        fn roundtrip(n in any::<i64>()) {
            let parsed = Minutes::parse(&n.to_string()).unwrap();
            prop_assert_eq!(parsed, Minutes::new(n));
        }

        /// Addition matches the underlying integers
        #[test]
        fn addition_matches_integers(a in -10_000i64..10_000, b in -10_000i64..10_000) {
            prop_assert_eq!((Minutes::new(a) + Minutes::new(b)).get(), a + b);
        }

        /// Parsing never panics on arbitrary input
        #[test]
        fn parse_total(s in ".*") {
            let _ = Minutes::parse(&s);
        }
    }
}
