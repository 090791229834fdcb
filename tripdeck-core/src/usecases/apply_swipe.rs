use super::prelude::*;

use super::add_to_trip::{add_to_trip, AddToTripOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Like and skip gestures only enter the history.
    Recorded,
    SavedToLibrary,
    AlreadySaved,
    AddedToTrip(Id),
    AlreadyInTrip(Id),
    /// Stale reference: nothing was recorded.
    UnknownPoi,
}

/// Applies a feed gesture to the selection state.
///
/// The id is resolved against the catalog first; an unknown id is ignored
/// without recording an event. For known items the event is always
/// appended, then the action updates at most one of the two selection sets.
/// No gesture ever removes anything.
pub fn apply_swipe<C, D>(
    catalog: &C,
    db: &D,
    poi_id: &str,
    action: SwipeAction,
) -> Result<SwipeOutcome>
where
    C: CatalogRepo,
    D: LibraryRepo + TripRepo + SwipeLogRepo,
{
    let poi = match catalog.try_get_poi(poi_id)? {
        Some(poi) => poi,
        None => {
            log::debug!("Ignoring {} on unknown point of interest {poi_id}", action.as_str());
            return Ok(SwipeOutcome::UnknownPoi);
        }
    };
    db.log_swipe_event(&SwipeEvent::now(poi.id.clone(), action))?;
    match action {
        SwipeAction::Like | SwipeAction::Skip => Ok(SwipeOutcome::Recorded),
        SwipeAction::Save => {
            if db.add_saved_if_not_present(&poi)? {
                Ok(SwipeOutcome::SavedToLibrary)
            } else {
                Ok(SwipeOutcome::AlreadySaved)
            }
        }
        SwipeAction::AddToTrip => Ok(match add_to_trip(db, poi)? {
            AddToTripOutcome::CreatedTrip(id) | AddToTripOutcome::AppendedTo(id) => {
                SwipeOutcome::AddedToTrip(id)
            }
            AddToTripOutcome::AlreadyPresent(id) => SwipeOutcome::AlreadyInTrip(id),
        }),
    }
}
