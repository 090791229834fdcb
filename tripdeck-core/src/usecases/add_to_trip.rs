use super::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddToTripOutcome {
    CreatedTrip(Id),
    AppendedTo(Id),
    AlreadyPresent(Id),
}

impl AddToTripOutcome {
    pub fn trip_id(&self) -> &Id {
        match self {
            Self::CreatedTrip(id) | Self::AppendedTo(id) | Self::AlreadyPresent(id) => id,
        }
    }
}

/// Groups a trip-selected point of interest into its destination trip.
///
/// The country is the grouping key: the first item from a new country
/// creates the trip, later items append in insertion order. Appending is
/// idempotent per item id.
pub fn add_to_trip<R: TripRepo>(repo: &R, poi: PointOfInterest) -> Result<AddToTripOutcome> {
    if let Some(mut trip) = repo.try_get_trip_by_country(&poi.country)? {
        if trip.contains_item(poi.id.as_str()) {
            return Ok(AddToTripOutcome::AlreadyPresent(trip.id));
        }
        trip.items.push(poi);
        repo.update_trip(&trip)?;
        return Ok(AddToTripOutcome::AppendedTo(trip.id));
    }
    let trip = new_trip_for_destination(poi);
    log::debug!("Creating trip \"{}\"", trip.name);
    repo.create_trip(&trip)?;
    Ok(AddToTripOutcome::CreatedTrip(trip.id))
}

fn new_trip_for_destination(poi: PointOfInterest) -> Trip {
    Trip {
        id: Id::new(),
        name: format!("{} Adventure", poi.country),
        city: poi.city.clone(),
        country: poi.country.clone(),
        created_at: Timestamp::now(),
        items: vec![poi],
    }
}
