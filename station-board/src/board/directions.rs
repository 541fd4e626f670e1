//! Direction discovery for a station's board.

use tracing::trace;

use crate::domain::{Direction, StationName, TrainRecord};

/// Distinct directions with outbound service from `station`.
///
/// Directions appear in order of first appearance on the board, duplicates
/// suppressed. Trains terminating at `station` are inbound and contribute no
/// direction, so a direction served only by terminating trains is absent.
/// Returns an empty list for an empty or all-terminating board.
pub fn station_directions(station: &StationName, trains: &[TrainRecord]) -> Vec<Direction> {
    let mut directions: Vec<Direction> = Vec::new();

    for train in trains {
        if train.terminates_at(station) {
            continue;
        }

        if !directions.contains(&train.direction) {
            trace!(direction = train.direction.as_str(), "found direction");
            directions.push(train.direction.clone());
        }
    }

    directions
}
