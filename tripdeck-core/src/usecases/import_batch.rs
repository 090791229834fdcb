use super::prelude::*;

use super::add_to_trip::{add_to_trip, AddToTripOutcome};

/// Adds a whole imported batch to the trip selection, in order.
///
/// Each item goes through the same grouping rule as a single gesture, so
/// re-importing a batch is idempotent.
pub fn add_all_to_trip<R: TripRepo>(
    repo: &R,
    batch: Vec<PointOfInterest>,
) -> Result<Vec<AddToTripOutcome>> {
    let mut outcomes = Vec::with_capacity(batch.len());
    for poi in batch {
        outcomes.push(add_to_trip(repo, poi)?);
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {

    use super::{
        super::tests::{builders::*, MockDb},
        *,
    };

    #[test]
    fn batch_lands_in_one_trip_in_order() {
        let db = MockDb::default();
        let batch = vec![
            poi("ig1", "Paris", "France"),
            poi("ig2", "Paris", "France"),
            poi("ig3", "Paris", "France"),
        ];
        let outcomes = add_all_to_trip(&db, batch).unwrap();
        assert!(matches!(outcomes[0], AddToTripOutcome::CreatedTrip(_)));
        assert!(matches!(outcomes[1], AddToTripOutcome::AppendedTo(_)));

        let trips = db.all_trips().unwrap();
        assert_eq!(1, trips.len());
        assert_eq!(3, trips[0].items.len());
    }

    #[test]
    fn reimporting_is_idempotent() {
        let db = MockDb::default();
        let batch = || vec![poi("ig1", "Paris", "France"), poi("ig2", "Paris", "France")];
        add_all_to_trip(&db, batch()).unwrap();
        let outcomes = add_all_to_trip(&db, batch()).unwrap();
        assert!(outcomes
            .iter()
            .all(|o| matches!(o, AddToTripOutcome::AlreadyPresent(_))));
        assert_eq!(2, db.all_trips().unwrap()[0].items.len());
    }
}
