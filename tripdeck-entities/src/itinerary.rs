use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::poi::PointOfInterest;

/// Fixed rotation of time-of-day slots used to distribute items across a day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumCount, EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    /// The slot rotation in scheduling order.
    pub const CYCLE: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];
}

/// A point of interest annotated with its computed schedule position.
///
/// Derived data: recomputed from the trip's item sequence whenever it
/// changes and never persisted. `day` is 1-based.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryEntry {
    pub poi    : PointOfInterest,
    pub day    : u32,
    pub slot   : TimeSlot,
    pub locked : bool,
}
