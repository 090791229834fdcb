use tripdeck_core::{
    db::SessionDb,
    entities::*,
    repositories::{Error as RepoError, *},
};

use super::JsonStore;

type Result<T> = std::result::Result<T, RepoError>;

impl LibraryRepo for JsonStore {
    fn add_saved_if_not_present(&self, poi: &PointOfInterest) -> Result<bool> {
        let mut state = self.state.write();
        if state.saved.iter().any(|p| p.id == poi.id) {
            return Ok(false);
        }
        state.saved.push(poi.clone());
        self.flush(&state);
        Ok(true)
    }

    fn all_saved(&self) -> Result<Vec<PointOfInterest>> {
        Ok(self.state.read().saved.clone())
    }

    fn try_get_saved(&self, id: &str) -> Result<Option<PointOfInterest>> {
        Ok(self
            .state
            .read()
            .saved
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned())
    }

    fn count_saved(&self) -> Result<usize> {
        Ok(self.state.read().saved.len())
    }

    fn remove_saved(&self, id: &str) -> Result<()> {
        let mut state = self.state.write();
        let pos = state
            .saved
            .iter()
            .position(|p| p.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        state.saved.remove(pos);
        self.flush(&state);
        Ok(())
    }
}

impl TripRepo for JsonStore {
    fn create_trip(&self, trip: &Trip) -> Result<()> {
        let mut state = self.state.write();
        if state.trips.iter().any(|t| t.id == trip.id) {
            return Err(RepoError::AlreadyExists);
        }
        state.trips.push(trip.clone());
        self.flush(&state);
        Ok(())
    }

    fn update_trip(&self, trip: &Trip) -> Result<()> {
        let mut state = self.state.write();
        let pos = state
            .trips
            .iter()
            .position(|t| t.id == trip.id)
            .ok_or(RepoError::NotFound)?;
        state.trips[pos] = trip.clone();
        self.flush(&state);
        Ok(())
    }

    fn get_trip(&self, id: &str) -> Result<Trip> {
        self.state
            .read()
            .trips
            .iter()
            .find(|t| t.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_trip_by_country(&self, country: &str) -> Result<Option<Trip>> {
        Ok(self
            .state
            .read()
            .trips
            .iter()
            .find(|t| t.country == country)
            .cloned())
    }

    fn all_trips(&self) -> Result<Vec<Trip>> {
        Ok(self.state.read().trips.clone())
    }

    fn count_trips(&self) -> Result<usize> {
        Ok(self.state.read().trips.len())
    }

    fn delete_trip(&self, id: &str) -> Result<()> {
        let mut state = self.state.write();
        let pos = state
            .trips
            .iter()
            .position(|t| t.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        state.trips.remove(pos);
        self.flush(&state);
        Ok(())
    }
}

impl SwipeLogRepo for JsonStore {
    // The swipe history is session-only, so logging never flushes.
    fn log_swipe_event(&self, event: &SwipeEvent) -> Result<()> {
        self.state.write().swipe_log.push(event.clone());
        Ok(())
    }

    fn all_swipe_events(&self) -> Result<Vec<SwipeEvent>> {
        Ok(self.state.read().swipe_log.clone())
    }
}

impl PreferencesRepo for JsonStore {
    fn store_preferences(&self, preferences: &UserPreferences) -> Result<()> {
        let mut state = self.state.write();
        state.preferences = Some(preferences.clone());
        self.flush(&state);
        Ok(())
    }

    fn try_get_preferences(&self) -> Result<Option<UserPreferences>> {
        Ok(self.state.read().preferences.clone())
    }
}

impl SessionDb for JsonStore {}
