//! Departure board queries.
//!
//! The two questions the board answers for a station: which directions it
//! serves, and what the next train in each direction is. Both are pure
//! functions over the fetched records; the caller fetches once and asks
//! both questions of the same list.

mod directions;
mod next_train;

pub use directions::station_directions;
pub use next_train::{NextTrain, next_train_for_direction};
