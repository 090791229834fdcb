use super::prelude::*;

/// Distributes a trip's items across days and time-of-day slots.
///
/// The assignment of entry `i` is a function of its position alone: three
/// items fill a day, cycling Morning, then Afternoon, then Evening, and the
/// day number advances with every third item. Category, zone, price and
/// prior locks never influence the result, so reordering or filtering the
/// input recomputes every assignment from scratch.
///
/// Total on all inputs: an empty sequence yields an empty itinerary.
pub fn generate_itinerary(items: &[PointOfInterest]) -> Vec<ItineraryEntry> {
    items
        .iter()
        .enumerate()
        .map(|(i, poi)| ItineraryEntry {
            poi: poi.clone(),
            day: (i / TimeSlot::CYCLE.len()) as u32 + 1,
            slot: TimeSlot::CYCLE[i % TimeSlot::CYCLE.len()],
            locked: false,
        })
        .collect()
}
