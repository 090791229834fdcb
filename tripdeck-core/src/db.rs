use crate::repositories::*;

/// Everything a live session needs from the mutable selection store.
///
/// The catalog is deliberately not part of this trait: it is a read-only
/// input supplied separately, so a store never owns content identity.
pub trait SessionDb: LibraryRepo + TripRepo + SwipeLogRepo + PreferencesRepo {}
