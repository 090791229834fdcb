// Low-level storage access traits.
// Each repository is responsible for a single collection of the session
// state. Related entities are only referenced by their id and never
// modified or loaded by another repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Read-only access to the static content catalog.
pub trait CatalogRepo {
    fn try_get_poi(&self, id: &str) -> Result<Option<PointOfInterest>>;

    fn get_poi(&self, id: &str) -> Result<PointOfInterest> {
        self.try_get_poi(id)?.ok_or(Error::NotFound)
    }

    fn all_pois(&self) -> Result<Vec<PointOfInterest>>;
    fn count_pois(&self) -> Result<usize>;
}

/// The user's saved-but-not-yet-scheduled points of interest.
pub trait LibraryRepo {
    // Set semantics by id. Ok(true) => inserted, Ok(false) => already present.
    fn add_saved_if_not_present(&self, poi: &PointOfInterest) -> Result<bool>;

    fn all_saved(&self) -> Result<Vec<PointOfInterest>>;
    fn try_get_saved(&self, id: &str) -> Result<Option<PointOfInterest>>;
    fn count_saved(&self) -> Result<usize>;

    fn remove_saved(&self, id: &str) -> Result<()>;
}

/// Country-scoped trip groups in insertion order.
pub trait TripRepo {
    fn create_trip(&self, trip: &Trip) -> Result<()>;
    fn update_trip(&self, trip: &Trip) -> Result<()>;

    fn get_trip(&self, id: &str) -> Result<Trip>;
    fn try_get_trip_by_country(&self, country: &str) -> Result<Option<Trip>>;

    fn all_trips(&self) -> Result<Vec<Trip>>;
    fn count_trips(&self) -> Result<usize>;

    fn delete_trip(&self, id: &str) -> Result<()>;
}

/// Append-only log of swipe gestures for the current session.
pub trait SwipeLogRepo {
    fn log_swipe_event(&self, event: &SwipeEvent) -> Result<()>;
    fn all_swipe_events(&self) -> Result<Vec<SwipeEvent>>;
}

/// Onboarding preferences, written once and read thereafter.
pub trait PreferencesRepo {
    fn store_preferences(&self, preferences: &UserPreferences) -> Result<()>;
    fn try_get_preferences(&self) -> Result<Option<UserPreferences>>;
}
