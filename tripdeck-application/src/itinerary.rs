use super::*;

use tripdeck_boundary as json;

/// A single rendered day of a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub day: u32,
    pub entries: Vec<ItineraryEntry>,
}

/// The generated schedule for one trip.
///
/// Recomputed on every call; the assignment lives nowhere else.
pub fn trip_itinerary<D: TripRepo>(db: &D, trip_id: &str) -> Result<Vec<ItineraryEntry>> {
    let trip = db.get_trip(trip_id)?;
    Ok(usecases::generate_itinerary(&trip.items))
}

/// Groups consecutive entries by day for rendering.
///
/// Pure presentation; adds no scheduling semantics of its own.
pub fn group_by_day(entries: Vec<ItineraryEntry>) -> Vec<DayPlan> {
    let mut days: Vec<DayPlan> = Vec::new();
    for entry in entries {
        match days.last_mut() {
            Some(plan) if plan.day == entry.day => plan.entries.push(entry),
            _ => days.push(DayPlan {
                day: entry.day,
                entries: vec![entry],
            }),
        }
    }
    days
}

/// Serializes an itinerary in the historical export shape.
pub fn itinerary_json(entries: Vec<ItineraryEntry>) -> Result<String> {
    let entries: Vec<json::ItineraryEntry> = entries.into_iter().map(Into::into).collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tripdeck_core::usecases::generate_itinerary;
    use tripdeck_entities::builders::Builder;

    fn sample(n: usize) -> Vec<PointOfInterest> {
        (0..n)
            .map(|i| {
                PointOfInterest::build()
                    .id(&format!("p{i}"))
                    .city("Lisbon")
                    .country("Portugal")
                    .finish()
            })
            .collect()
    }

    #[test]
    fn groups_consecutive_days() {
        let days = group_by_day(generate_itinerary(&sample(7)));
        assert_eq!(3, days.len());
        assert_eq!(vec![1, 2, 3], days.iter().map(|d| d.day).collect::<Vec<_>>());
        assert_eq!(3, days[0].entries.len());
        assert_eq!(1, days[2].entries.len());
    }

    #[test]
    fn empty_itinerary_renders_no_days() {
        assert!(group_by_day(vec![]).is_empty());
    }
}
