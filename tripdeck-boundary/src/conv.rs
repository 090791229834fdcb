use super::*;
use tripdeck_entities as e;

impl From<e::poi::Category> for TravelCategory {
    fn from(from: e::poi::Category) -> Self {
        use e::poi::Category::*;
        match from {
            Stay => TravelCategory::Stay,
            Food => TravelCategory::Food,
            Activity => TravelCategory::Activity,
            Transport => TravelCategory::Transport,
            Nightlife => TravelCategory::Nightlife,
        }
    }
}

impl From<TravelCategory> for e::poi::Category {
    fn from(from: TravelCategory) -> Self {
        use e::poi::Category::*;
        match from {
            TravelCategory::Stay => Stay,
            TravelCategory::Food => Food,
            TravelCategory::Activity => Activity,
            TravelCategory::Transport => Transport,
            TravelCategory::Nightlife => Nightlife,
        }
    }
}

impl From<e::poi::PointOfInterest> for PointOfInterest {
    fn from(from: e::poi::PointOfInterest) -> Self {
        let e::poi::PointOfInterest {
            id,
            city,
            country,
            title,
            short_desc,
            price_range,
            tags,
            creator_handle,
            media_placeholder,
            category,
            zone,
        } = from;
        Self {
            id: id.into(),
            city,
            country,
            title,
            short_desc,
            price_range,
            tags,
            creator_handle,
            media_placeholder,
            category: category.into(),
            zone,
        }
    }
}

impl From<PointOfInterest> for e::poi::PointOfInterest {
    fn from(from: PointOfInterest) -> Self {
        let PointOfInterest {
            id,
            city,
            country,
            title,
            short_desc,
            price_range,
            tags,
            creator_handle,
            media_placeholder,
            category,
            zone,
        } = from;
        Self {
            id: id.into(),
            city,
            country,
            title,
            short_desc,
            price_range,
            tags,
            creator_handle,
            media_placeholder,
            category: category.into(),
            zone,
        }
    }
}

impl From<e::trip::Trip> for Trip {
    fn from(from: e::trip::Trip) -> Self {
        let e::trip::Trip {
            id,
            name,
            city,
            country,
            items,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            city,
            country,
            items: items.into_iter().map(Into::into).collect(),
            created_at: created_at.into_milliseconds(),
        }
    }
}

impl From<Trip> for e::trip::Trip {
    fn from(from: Trip) -> Self {
        let Trip {
            id,
            name,
            city,
            country,
            items,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            city,
            country,
            items: items.into_iter().map(Into::into).collect(),
            created_at: e::time::Timestamp::from_milliseconds(created_at),
        }
    }
}

impl From<e::preferences::BudgetRange> for BudgetRange {
    fn from(from: e::preferences::BudgetRange) -> Self {
        use e::preferences::BudgetRange::*;
        match from {
            Economy => BudgetRange::Economy,
            Standard => BudgetRange::Standard,
            Luxury => BudgetRange::Luxury,
        }
    }
}

impl From<BudgetRange> for e::preferences::BudgetRange {
    fn from(from: BudgetRange) -> Self {
        use e::preferences::BudgetRange::*;
        match from {
            BudgetRange::Economy => Economy,
            BudgetRange::Standard => Standard,
            BudgetRange::Luxury => Luxury,
        }
    }
}

impl From<e::preferences::UserPreferences> for UserPreferences {
    fn from(from: e::preferences::UserPreferences) -> Self {
        let e::preferences::UserPreferences {
            budget,
            interests,
            travel_style,
        } = from;
        Self {
            budget_range: budget.into(),
            interests,
            travel_style,
        }
    }
}

impl From<UserPreferences> for e::preferences::UserPreferences {
    fn from(from: UserPreferences) -> Self {
        let UserPreferences {
            budget_range,
            interests,
            travel_style,
        } = from;
        Self {
            budget: budget_range.into(),
            interests,
            travel_style,
        }
    }
}

impl From<e::itinerary::TimeSlot> for TimeSlot {
    fn from(from: e::itinerary::TimeSlot) -> Self {
        use e::itinerary::TimeSlot::*;
        match from {
            Morning => TimeSlot::Morning,
            Afternoon => TimeSlot::Afternoon,
            Evening => TimeSlot::Evening,
        }
    }
}

impl From<e::itinerary::ItineraryEntry> for ItineraryEntry {
    fn from(from: e::itinerary::ItineraryEntry) -> Self {
        let e::itinerary::ItineraryEntry {
            poi,
            day,
            slot,
            locked,
        } = from;
        Self {
            poi: poi.into(),
            day,
            time_slot: slot.into(),
            locked,
        }
    }
}
