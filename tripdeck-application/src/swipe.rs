use super::*;

use tripdeck_core::usecases::SwipeOutcome;

/// Applies a feed gesture and reports what changed.
pub fn swipe<C, D>(catalog: &C, db: &D, poi_id: &str, action: SwipeAction) -> Result<SwipeOutcome>
where
    C: CatalogRepo,
    D: SessionDb,
{
    let outcome = usecases::apply_swipe(catalog, db, poi_id, action)?;
    match &outcome {
        SwipeOutcome::SavedToLibrary => info!("Saved {poi_id} to the library"),
        SwipeOutcome::AddedToTrip(trip_id) => info!("Added {poi_id} to trip {trip_id}"),
        SwipeOutcome::UnknownPoi => warn!("Swiped a stale point of interest: {poi_id}"),
        SwipeOutcome::Recorded | SwipeOutcome::AlreadySaved | SwipeOutcome::AlreadyInTrip(_) => {}
    }
    Ok(outcome)
}
