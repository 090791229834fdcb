use super::*;

pub fn all_trips<D: TripRepo>(db: &D) -> Result<Vec<Trip>> {
    Ok(db.all_trips()?)
}

pub fn remove_trip<D: TripRepo>(db: &D, trip_id: &str) -> Result<()> {
    usecases::remove_trip(db, trip_id)?;
    info!("Removed trip {trip_id}");
    Ok(())
}

/// Removes one item from a trip; the trip itself stays, even when emptied.
pub fn remove_trip_item<D: TripRepo>(db: &D, trip_id: &str, poi_id: &str) -> Result<bool> {
    Ok(usecases::remove_trip_item(db, trip_id, poi_id)?)
}
