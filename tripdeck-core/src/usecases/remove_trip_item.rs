use super::prelude::*;

/// Removes a single item from a trip.
///
/// Ok(true) => removed, Ok(false) => the trip holds no such item.
/// An emptied trip survives until it is removed explicitly.
pub fn remove_trip_item<R: TripRepo>(repo: &R, trip_id: &str, poi_id: &str) -> Result<bool> {
    let mut trip = repo.get_trip(trip_id)?;
    let len_before = trip.items.len();
    trip.items.retain(|item| item.id.as_str() != poi_id);
    if trip.items.len() == len_before {
        return Ok(false);
    }
    repo.update_trip(&trip)?;
    Ok(true)
}
