//! Next-train selection for one direction.

use crate::domain::{Direction, Minutes, StationName, TrainRecord};

/// The next train in a direction, with the delay-adjusted due time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextTrain {
    /// Where that train is heading.
    pub destination: StationName,
    /// Minutes until arrival including the delay.
    pub actual_due: Minutes,
}

/// First train on the board heading `direction`, if any.
///
/// The feed orders the board soonest-first, so the first match is the next
/// arrival; this function preserves board order rather than comparing due
/// times itself. Trains terminating at `station` never qualify. `None`
/// means no service in that direction - a normal outcome (e.g. the last
/// train of the day has passed), not an error.
pub fn next_train_for_direction(
    station: &StationName,
    trains: &[TrainRecord],
    direction: &Direction,
) -> Option<NextTrain> {
    trains
        .iter()
        .filter(|train| !train.terminates_at(station))
        .find(|train| &train.direction == direction)
        .map(|train| NextTrain {
            destination: train.destination.clone(),
            actual_due: train.actual_due(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(destination: &str, direction: &str, due_in: i64, late: i64) -> TrainRecord {
        TrainRecord {
            destination: StationName::parse(destination).unwrap(),
            direction: Direction::parse(direction).unwrap(),
            due_in: Minutes::new(due_in),
            late: Minutes::new(late),
        }
    }

    fn station(name: &str) -> StationName {
        StationName::parse(name).unwrap()
    }

    fn direction(label: &str) -> Direction {
        Direction::parse(label).unwrap()
    }

    #[test]
    fn finds_next_southbound_with_delay_applied() {
        let trains = vec![
            record("Malahide", "Northbound", 2, 0),
            record("Dublin Pearse", "Southbound", 5, 1),
        ];

        let next =
            next_train_for_direction(&station("Malahide"), &trains, &direction("Southbound"))
                .unwrap();

        assert_eq!(next.destination.as_str(), "Dublin Pearse");
        assert_eq!(next.actual_due, Minutes::new(6));
    }

    #[test]
    fn no_matching_direction_is_absence_not_error() {
        let trains = vec![record("Dublin Pearse", "Southbound", 5, 1)];

        let next =
            next_train_for_direction(&station("Malahide"), &trains, &direction("Northbound"));
        assert_eq!(next, None);
    }

    #[test]
    fn empty_board_gives_absence() {
        let next = next_train_for_direction(&station("Malahide"), &[], &direction("Southbound"));
        assert_eq!(next, None);
    }

    #[test]
    fn first_listed_wins_over_smaller_due_time() {
        // Board order decides, even when a later train would arrive sooner.
        let trains = vec![
            record("Drogheda", "Northbound", 20, 0),
            record("Howth", "Northbound", 3, 0),
        ];

        let next =
            next_train_for_direction(&station("Malahide"), &trains, &direction("Northbound"))
                .unwrap();

        assert_eq!(next.destination.as_str(), "Drogheda");
        assert_eq!(next.actual_due, Minutes::new(20));
    }

    #[test]
    fn terminating_train_is_skipped_even_when_direction_matches() {
        let trains = vec![
            record("Malahide", "Northbound", 2, 0),
            record("Drogheda", "Northbound", 9, 1),
        ];

        let next =
            next_train_for_direction(&station("Malahide"), &trains, &direction("Northbound"))
                .unwrap();

        assert_eq!(next.destination.as_str(), "Drogheda");
        assert_eq!(next.actual_due, Minutes::new(10));
    }

    #[test]
    fn only_terminating_trains_gives_absence() {
        let trains = vec![record("Malahide", "Northbound", 2, 0)];

        let next =
            next_train_for_direction(&station("Malahide"), &trains, &direction("Northbound"));
        assert_eq!(next, None);
    }

    #[test]
    fn early_train_reduces_actual_due() {
        let trains = vec![record("Bray", "Southbound", 5, -1)];

        let next =
            next_train_for_direction(&station("Malahide"), &trains, &direction("Southbound"))
                .unwrap();

        assert_eq!(next.actual_due, Minutes::new(4));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const TARGET: &str = "Malahide";
    const DESTINATIONS: &[&str] = &["Malahide", "Howth", "Bray", "Drogheda", "Greystones"];
    const DIRECTIONS: &[&str] = &["Northbound", "Southbound", "To Dublin"];

    fn arb_record() -> impl Strategy<Value = TrainRecord> {
        (
            prop::sample::select(DESTINATIONS),
            prop::sample::select(DIRECTIONS),
            -5i64..180,
            -10i64..60,
        )
            .prop_map(|(destination, direction, due_in, late)| TrainRecord {
                destination: StationName::parse(destination).unwrap(),
                direction: Direction::parse(direction).unwrap(),
                due_in: Minutes::new(due_in),
                late: Minutes::new(late),
            })
    }

    fn arb_board() -> impl Strategy<Value = Vec<TrainRecord>> {
        prop::collection::vec(arb_record(), 0..12)
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(DIRECTIONS).prop_map(|d| Direction::parse(d).unwrap())
    }

    proptest! {
        /// The selected train never terminates at the queried station
        #[test]
        fn never_returns_terminating_train(trains in arb_board(), dir in arb_direction()) {
            let target = StationName::parse(TARGET).unwrap();

            if let Some(next) = next_train_for_direction(&target, &trains, &dir) {
                prop_assert_ne!(next.destination, target);
            }
        }

        /// The selection is exactly the first qualifying record in board order
        #[test]
        fn first_qualifying_record_wins(trains in arb_board(), dir in arb_direction()) {
            let target = StationName::parse(TARGET).unwrap();

            let expected = trains
                .iter()
                .find(|t| !t.terminates_at(&target) && t.direction == dir)
                .map(|t| NextTrain {
                    destination: t.destination.clone(),
                    actual_due: t.due_in + t.late,
                });

            prop_assert_eq!(next_train_for_direction(&target, &trains, &dir), expected);
        }

        /// Absence means no qualifying record exists
        #[test]
        fn absence_means_no_service(trains in arb_board(), dir in arb_direction()) {
            let target = StationName::parse(TARGET).unwrap();

            if next_train_for_direction(&target, &trains, &dir).is_none() {
                let any_qualifying = trains.iter().any(|t| {
                    !t.terminates_at(&target) && t.direction == dir
                });
                prop_assert!(!any_qualifying);
            }
        }

        /// Every direction the extractor reports has a next train
        #[test]
        fn extracted_directions_always_have_a_train(trains in arb_board()) {
            let target = StationName::parse(TARGET).unwrap();

            for dir in super::super::directions::station_directions(&target, &trains) {
                prop_assert!(next_train_for_direction(&target, &trains, &dir).is_some());
            }
        }
    }
}
