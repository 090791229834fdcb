use crate::{id::Id, poi::PointOfInterest, time::Timestamp};

/// A named, destination-scoped collection of points of interest.
///
/// Invariant: all items share the trip's `country`, which is the grouping
/// key. Item order is insertion order and duplicates (by id) are forbidden;
/// both are enforced by the grouping operation, not here.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub id         : Id,
    pub name       : String,
    pub city       : String,
    pub country    : String,
    pub items      : Vec<PointOfInterest>,
    pub created_at : Timestamp,
}

impl Trip {
    pub fn contains_item(&self, poi_id: &str) -> bool {
        self.items.iter().any(|item| item.id.as_str() == poi_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
