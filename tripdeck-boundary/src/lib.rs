//! Serializable, anemic data structures for the persisted session record.
//!
//! Field names follow the historical wire format (camelCase), including the
//! two legacy spellings a stored record may still carry: `saved` for
//! `savedItems`, and a flat `tripItems` list instead of grouped `trips`.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
#[serde(rename_all = "snake_case")]
pub enum TravelCategory {
    Stay,
    Food,
    Activity,
    Transport,
    Nightlife,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterest {
    pub id                : String,
    pub city              : String,
    pub country           : String,
    pub title             : String,
    pub short_desc        : String,
    pub price_range       : String,
    pub tags              : Vec<String>,
    pub creator_handle    : String,
    pub media_placeholder : String,
    pub category          : TravelCategory,
    pub zone              : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub items: Vec<PointOfInterest>,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, Copy, PartialEq, Eq)
)]
pub enum BudgetRange {
    Economy,
    Standard,
    Luxury,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub budget_range: BudgetRange,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub travel_style: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, Copy, PartialEq, Eq)
)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

/// One line of a generated itinerary, for export only.
///
/// Mirrors the historical shape: the point of interest flattened together
/// with its schedule assignment.
#[derive(Serialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct ItineraryEntry {
    #[serde(flatten)]
    pub poi: PointOfInterest,
    pub day: u32,
    pub time_slot: TimeSlot,
    pub locked: bool,
}

/// The single persisted record.
///
/// Reading accepts both observed evolutionary shapes; writing always emits
/// the canonical grouped-trip shape with `savedItems`/`trips`/`userPrefs`.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    #[serde(default, alias = "saved")]
    pub saved_items: Vec<PointOfInterest>,
    #[serde(default)]
    pub trips: Vec<Trip>,
    // Legacy flat trip selection; consumed by the storage layer's
    // regrouping at load time and never written back.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trip_items: Vec<PointOfInterest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_prefs: Option<UserPreferences>,
}
