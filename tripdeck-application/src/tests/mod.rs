use std::time::Duration;

use tripdeck_db_json::JsonStore;

use crate::{prelude::*, usecases::SwipeOutcome, *};

pub mod fixtures {
    use super::*;

    pub fn session() -> (Catalog, JsonStore) {
        (Catalog::builtin(), JsonStore::in_memory())
    }

    pub fn paris_batch() -> Vec<PointOfInterest> {
        instagram_import_batch()
    }
}

#[test]
fn four_lisbon_cards_become_a_two_day_portugal_itinerary() {
    let (catalog, db) = fixtures::session();
    for id in ["lis-01", "lis-02", "lis-03", "lis-04"] {
        swipe(&catalog, &db, id, SwipeAction::AddToTrip).unwrap();
    }

    let trips = all_trips(&db).unwrap();
    assert_eq!(1, trips.len());
    let trip = &trips[0];
    assert_eq!("Portugal Adventure", trip.name);
    assert_eq!(
        vec!["lis-01", "lis-02", "lis-03", "lis-04"],
        trip.items.iter().map(|p| p.id.as_str()).collect::<Vec<_>>()
    );

    let entries = trip_itinerary(&db, trip.id.as_str()).unwrap();
    let schedule: Vec<_> = entries
        .iter()
        .map(|e| (e.poi.id.as_str(), e.day, e.slot))
        .collect();
    assert_eq!(
        vec![
            ("lis-01", 1, TimeSlot::Morning),
            ("lis-02", 1, TimeSlot::Afternoon),
            ("lis-03", 1, TimeSlot::Evening),
            ("lis-04", 2, TimeSlot::Morning),
        ],
        schedule
    );

    let days = group_by_day(entries);
    assert_eq!(2, days.len());
    assert_eq!(3, days[0].entries.len());
    assert_eq!(1, days[1].entries.len());
}

#[test]
fn onboarding_gate_opens_once_preferences_are_stored() {
    let (_, db) = fixtures::session();
    assert!(!has_completed_onboarding(&db).unwrap());

    complete_onboarding(
        &db,
        UserPreferences {
            budget: BudgetRange::Standard,
            interests: vec!["culture".into(), "food".into()],
            travel_style: vec!["relaxed".into()],
        },
    )
    .unwrap();

    assert!(has_completed_onboarding(&db).unwrap());
    let prefs = stored_preferences(&db).unwrap().unwrap();
    assert_eq!(BudgetRange::Standard, prefs.budget);
}

#[test]
fn saving_builds_a_city_grouped_library() {
    let (catalog, db) = fixtures::session();
    for id in ["lis-02", "tok-01", "lis-03"] {
        assert_eq!(
            SwipeOutcome::SavedToLibrary,
            swipe(&catalog, &db, id, SwipeAction::Save).unwrap()
        );
    }

    let groups = saved_library(&db).unwrap();
    assert_eq!(2, groups.len());
    assert_eq!("Lisbon", groups[0].city);
    assert_eq!(2, groups[0].items.len());
    assert_eq!("Tokyo", groups[1].city);
}

#[test]
fn library_items_can_move_into_a_trip() {
    let (catalog, db) = fixtures::session();
    swipe(&catalog, &db, "tok-01", SwipeAction::Save).unwrap();

    assert!(add_saved_to_trip(&db, "tok-01").unwrap().is_some());
    // Unknown saved items are ignored, mirroring stale feed references.
    assert!(add_saved_to_trip(&db, "lis-01").unwrap().is_none());

    let trips = all_trips(&db).unwrap();
    assert_eq!(1, trips.len());
    assert_eq!("Japan Adventure", trips[0].name);
    // The saved copy stays in the library.
    assert_eq!(1, db.count_saved().unwrap());
}

#[test]
fn import_adds_the_whole_batch_to_one_trip() {
    let (_, db) = fixtures::session();
    let outcomes = run_import(&db, fixtures::paris_batch(), Duration::from_millis(5)).unwrap();
    assert_eq!(3, outcomes.len());

    let trips = all_trips(&db).unwrap();
    assert_eq!(1, trips.len());
    assert_eq!("France Adventure", trips[0].name);
    assert_eq!(3, trips[0].items.len());
}

#[test]
fn removal_is_always_explicit() {
    let (catalog, db) = fixtures::session();
    swipe(&catalog, &db, "lis-01", SwipeAction::Save).unwrap();
    swipe(&catalog, &db, "lis-01", SwipeAction::AddToTrip).unwrap();
    swipe(&catalog, &db, "lis-02", SwipeAction::AddToTrip).unwrap();

    remove_from_library(&db, "lis-01").unwrap();
    assert_eq!(0, db.count_saved().unwrap());

    let trip_id = all_trips(&db).unwrap()[0].id.clone();
    assert!(remove_trip_item(&db, trip_id.as_str(), "lis-02").unwrap());
    assert_eq!(1, all_trips(&db).unwrap()[0].items.len());

    remove_trip(&db, trip_id.as_str()).unwrap();
    assert!(all_trips(&db).unwrap().is_empty());
}
