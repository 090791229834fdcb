use std::cell::RefCell;

use crate::{
    db::SessionDb,
    entities::*,
    repositories::{Error as RepoError, *},
};


type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub catalog: Vec<PointOfInterest>,
    pub saved: RefCell<Vec<PointOfInterest>>,
    pub trips: RefCell<Vec<Trip>>,
    pub swipe_log: RefCell<Vec<SwipeEvent>>,
    pub preferences: RefCell<Option<UserPreferences>>,
}

impl CatalogRepo for MockDb {
    fn try_get_poi(&self, id: &str) -> RepoResult<Option<PointOfInterest>> {
        Ok(self.catalog.iter().find(|p| p.id.as_str() == id).cloned())
    }

    fn all_pois(&self) -> RepoResult<Vec<PointOfInterest>> {
        Ok(self.catalog.clone())
    }

    fn count_pois(&self) -> RepoResult<usize> {
        Ok(self.catalog.len())
    }
}

impl LibraryRepo for MockDb {
    fn add_saved_if_not_present(&self, poi: &PointOfInterest) -> RepoResult<bool> {
        let mut saved = self.saved.borrow_mut();
        if saved.iter().any(|p| p.id == poi.id) {
            return Ok(false);
        }
        saved.push(poi.clone());
        Ok(true)
    }

    fn all_saved(&self) -> RepoResult<Vec<PointOfInterest>> {
        Ok(self.saved.borrow().clone())
    }

    fn try_get_saved(&self, id: &str) -> RepoResult<Option<PointOfInterest>> {
        Ok(self
            .saved
            .borrow()
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned())
    }

    fn count_saved(&self) -> RepoResult<usize> {
        Ok(self.saved.borrow().len())
    }

    fn remove_saved(&self, id: &str) -> RepoResult<()> {
        let mut saved = self.saved.borrow_mut();
        let pos = saved
            .iter()
            .position(|p| p.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        saved.remove(pos);
        Ok(())
    }
}

impl TripRepo for MockDb {
    fn create_trip(&self, trip: &Trip) -> RepoResult<()> {
        let mut trips = self.trips.borrow_mut();
        if trips.iter().any(|t| t.id == trip.id) {
            return Err(RepoError::AlreadyExists);
        }
        trips.push(trip.clone());
        Ok(())
    }

    fn update_trip(&self, trip: &Trip) -> RepoResult<()> {
        let mut trips = self.trips.borrow_mut();
        let pos = trips
            .iter()
            .position(|t| t.id == trip.id)
            .ok_or(RepoError::NotFound)?;
        trips[pos] = trip.clone();
        Ok(())
    }

    fn get_trip(&self, id: &str) -> RepoResult<Trip> {
        self.trips
            .borrow()
            .iter()
            .find(|t| t.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_trip_by_country(&self, country: &str) -> RepoResult<Option<Trip>> {
        Ok(self
            .trips
            .borrow()
            .iter()
            .find(|t| t.country == country)
            .cloned())
    }

    fn all_trips(&self) -> RepoResult<Vec<Trip>> {
        Ok(self.trips.borrow().clone())
    }

    fn count_trips(&self) -> RepoResult<usize> {
        Ok(self.trips.borrow().len())
    }

    fn delete_trip(&self, id: &str) -> RepoResult<()> {
        let mut trips = self.trips.borrow_mut();
        let pos = trips
            .iter()
            .position(|t| t.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        trips.remove(pos);
        Ok(())
    }
}

impl SwipeLogRepo for MockDb {
    fn log_swipe_event(&self, event: &SwipeEvent) -> RepoResult<()> {
        self.swipe_log.borrow_mut().push(event.clone());
        Ok(())
    }

    fn all_swipe_events(&self) -> RepoResult<Vec<SwipeEvent>> {
        Ok(self.swipe_log.borrow().clone())
    }
}

impl PreferencesRepo for MockDb {
    fn store_preferences(&self, preferences: &UserPreferences) -> RepoResult<()> {
        *self.preferences.borrow_mut() = Some(preferences.clone());
        Ok(())
    }

    fn try_get_preferences(&self) -> RepoResult<Option<UserPreferences>> {
        Ok(self.preferences.borrow().clone())
    }
}

impl SessionDb for MockDb {}
