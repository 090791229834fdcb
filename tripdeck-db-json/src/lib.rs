//! Durable session storage over a single JSON record.
//!
//! The whole selection state {saved library, trips, preferences} is one
//! document under one path: every mutation rewrites it, last write wins.
//! Flush failures are logged and never propagated, and an absent or
//! unreadable record restores empty defaults instead of failing startup.

use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use parking_lot::RwLock;

use tripdeck_boundary as json;
use tripdeck_core::{entities::*, usecases};

mod repo_impl;

#[derive(Debug, Default)]
struct State {
    saved: Vec<PointOfInterest>,
    trips: Vec<Trip>,
    preferences: Option<UserPreferences>,
    // Session-only; deliberately absent from the persisted record.
    swipe_log: Vec<SwipeEvent>,
}

#[derive(Debug)]
pub struct JsonStore {
    path: Option<PathBuf>,
    state: RwLock<State>,
}

impl JsonStore {
    /// Restores the session from `path`, or starts empty.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (state, legacy_trip_items) = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<json::StoredSession>(&contents) {
                Ok(record) => restore(record),
                Err(err) => {
                    log::warn!(
                        "Failed to parse stored session {}: {err} => empty defaults",
                        path.display()
                    );
                    (State::default(), vec![])
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!(
                    "No stored session at {} => empty defaults",
                    path.display()
                );
                (State::default(), vec![])
            }
            Err(err) => {
                log::warn!(
                    "Failed to read stored session {}: {err} => empty defaults",
                    path.display()
                );
                (State::default(), vec![])
            }
        };
        let store = Self {
            path: Some(path),
            state: RwLock::new(state),
        };
        if !legacy_trip_items.is_empty() {
            // Route the legacy flat selection through the canonical
            // grouping rule; the next flush rewrites the record in the
            // canonical shape.
            log::info!(
                "Regrouping {} legacy trip items into trips",
                legacy_trip_items.len()
            );
            if let Err(err) = usecases::add_all_to_trip(&store, legacy_trip_items) {
                log::warn!("Failed to regroup legacy trip items: {err}");
            }
        }
        store
    }

    /// An ephemeral store without a backing file.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            state: RwLock::new(State::default()),
        }
    }

    // Fire and forget: a failed write must never fail the operation that
    // triggered it.
    fn flush(&self, state: &State) {
        let path = match &self.path {
            Some(path) => path,
            None => return,
        };
        let record = json::StoredSession {
            saved_items: state.saved.iter().cloned().map(Into::into).collect(),
            trips: state.trips.iter().cloned().map(Into::into).collect(),
            trip_items: vec![],
            user_prefs: state.preferences.clone().map(Into::into),
        };
        let contents = match serde_json::to_string_pretty(&record) {
            Ok(contents) => contents,
            Err(err) => {
                log::error!("Failed to serialize session record: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(path, contents) {
            log::error!("Failed to write session record {}: {err}", path.display());
        }
    }
}

fn restore(record: json::StoredSession) -> (State, Vec<PointOfInterest>) {
    let json::StoredSession {
        saved_items,
        trips,
        trip_items,
        user_prefs,
    } = record;
    let state = State {
        saved: saved_items.into_iter().map(Into::into).collect(),
        trips: trips.into_iter().map(Into::into).collect(),
        preferences: user_prefs.map(Into::into),
        swipe_log: vec![],
    };
    (state, trip_items.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tripdeck_core::{entities::*, repositories::*};
    use tripdeck_entities::builders::Builder;

    use super::*;

    fn poi(id: &str, city: &str, country: &str) -> PointOfInterest {
        PointOfInterest::build()
            .id(id)
            .city(city)
            .country(country)
            .title(id)
            .finish()
    }

    fn scratch_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("tripdeck-{name}-{}.json", Id::new()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn round_trips_the_whole_selection_state() {
        let path = scratch_file("roundtrip");

        let store = JsonStore::load_or_default(&path);
        store
            .add_saved_if_not_present(&poi("s1", "Lisbon", "Portugal"))
            .unwrap();
        usecases::add_to_trip(&store, poi("t1", "Tokyo", "Japan")).unwrap();
        store
            .store_preferences(&UserPreferences {
                budget: BudgetRange::Luxury,
                interests: vec!["food".into()],
                travel_style: vec![],
            })
            .unwrap();
        drop(store);

        let restored = JsonStore::load_or_default(&path);
        assert_eq!(1, restored.count_saved().unwrap());
        let trips = restored.all_trips().unwrap();
        assert_eq!(1, trips.len());
        assert_eq!("Japan Adventure", trips[0].name);
        assert_eq!(
            BudgetRange::Luxury,
            restored.try_get_preferences().unwrap().unwrap().budget
        );
        // The swipe history is session-only and never round-trips.
        assert!(restored.all_swipe_events().unwrap().is_empty());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unparsable_record_restores_empty_defaults() {
        let path = scratch_file("corrupt");
        fs::write(&path, "not json at all {").unwrap();

        let store = JsonStore::load_or_default(&path);
        assert_eq!(0, store.count_saved().unwrap());
        assert_eq!(0, store.count_trips().unwrap());
        assert!(store.try_get_preferences().unwrap().is_none());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn legacy_flat_trip_items_are_regrouped_by_country() {
        let path = scratch_file("legacy");
        fs::write(
            &path,
            r#"{
                "saved": [],
                "tripItems": [
                    {"id": "a1", "city": "Lisbon", "country": "Portugal", "title": "A1",
                     "shortDesc": "", "priceRange": "", "tags": [], "creatorHandle": "",
                     "mediaPlaceholder": "", "category": "food", "zone": ""},
                    {"id": "b1", "city": "Tokyo", "country": "Japan", "title": "B1",
                     "shortDesc": "", "priceRange": "", "tags": [], "creatorHandle": "",
                     "mediaPlaceholder": "", "category": "stay", "zone": ""},
                    {"id": "a2", "city": "Porto", "country": "Portugal", "title": "A2",
                     "shortDesc": "", "priceRange": "", "tags": [], "creatorHandle": "",
                     "mediaPlaceholder": "", "category": "activity", "zone": ""}
                ]
            }"#,
        )
        .unwrap();

        let store = JsonStore::load_or_default(&path);
        let trips = store.all_trips().unwrap();
        assert_eq!(2, trips.len());
        assert_eq!("Portugal Adventure", trips[0].name);
        assert_eq!(2, trips[0].items.len());
        assert_eq!("Japan Adventure", trips[1].name);

        // The rewritten record is canonical.
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"trips\""));
        assert!(!contents.contains("\"tripItems\""));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn in_memory_store_has_no_backing_file() {
        let store = JsonStore::in_memory();
        store
            .add_saved_if_not_present(&poi("s1", "Lisbon", "Portugal"))
            .unwrap();
        assert_eq!(1, store.count_saved().unwrap());
        assert!(store.path.is_none());
    }
}
