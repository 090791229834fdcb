use super::*;

use tripdeck_core::usecases::{AddToTripOutcome, CityGroup};

/// The saved library grouped by city for display.
pub fn saved_library<D: LibraryRepo>(db: &D) -> Result<Vec<CityGroup>> {
    Ok(usecases::load_saved_library(db)?)
}

/// "Add to trip" from the library screen.
///
/// Resolves against the saved items, not the feed catalog: the library is
/// the source of truth for what the screen shows.
pub fn add_saved_to_trip<D>(db: &D, poi_id: &str) -> Result<Option<AddToTripOutcome>>
where
    D: LibraryRepo + TripRepo,
{
    let poi = match db.try_get_saved(poi_id)? {
        Some(poi) => poi,
        None => {
            debug!("Ignoring add-to-trip for unknown saved item {poi_id}");
            return Ok(None);
        }
    };
    Ok(Some(usecases::add_to_trip(db, poi)?))
}

pub fn remove_from_library<D: LibraryRepo>(db: &D, poi_id: &str) -> Result<()> {
    usecases::remove_from_library(db, poi_id)?;
    Ok(())
}
