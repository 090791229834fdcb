use super::prelude::*;

/// Deletes a trip from the collection.
///
/// No cascade: the items are value copies, the catalog and the library are
/// untouched.
pub fn remove_trip<R: TripRepo>(repo: &R, trip_id: &str) -> Result<()> {
    repo.delete_trip(trip_id)?;
    log::debug!("Removed trip {trip_id}");
    Ok(())
}
