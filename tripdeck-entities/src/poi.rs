use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::id::Id;

/// The closed set of content categories shown in the feed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumCount, EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Stay,
    Food,
    Activity,
    Transport,
    Nightlife,
}

/// A single discoverable place or activity from the catalog.
///
/// Immutable by construction: the catalog owns identity and content, other
/// collections hold value copies. The `zone` is a neighborhood label used
/// for display only and never enters any distance computation.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointOfInterest {
    pub id                : Id,
    pub city              : String,
    pub country           : String,
    pub title             : String,
    pub short_desc        : String,
    pub price_range       : String,
    pub tags              : Vec<String>,
    pub creator_handle    : String,
    pub media_placeholder : String,
    pub category          : Category,
    pub zone              : String,
}
