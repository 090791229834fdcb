use std::str::FromStr;

use thiserror::Error;

use crate::{id::Id, time::Timestamp};

/// The closed set of gestures a user can apply to a feed card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SwipeAction {
    Like,
    Save,
    AddToTrip,
    Skip,
}

impl SwipeAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Save => "save",
            Self::AddToTrip => "add_to_trip",
            Self::Skip => "skip",
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid swipe action")]
pub struct SwipeActionParseError;

impl FromStr for SwipeAction {
    type Err = SwipeActionParseError;
    fn from_str(s: &str) -> Result<SwipeAction, Self::Err> {
        match &*s.to_lowercase() {
            "like" => Ok(SwipeAction::Like),
            "save" => Ok(SwipeAction::Save),
            "add_to_trip" | "add-to-trip" => Ok(SwipeAction::AddToTrip),
            "skip" => Ok(SwipeAction::Skip),
            _ => Err(SwipeActionParseError),
        }
    }
}

/// Append-only record of a single gesture.
///
/// Events are never mutated or removed once recorded.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeEvent {
    pub poi_id : Id,
    pub action : SwipeAction,
    pub at     : Timestamp,
}

impl SwipeEvent {
    pub fn now(poi_id: Id, action: SwipeAction) -> Self {
        Self {
            poi_id,
            action,
            at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_action_from_str() {
        assert_eq!(SwipeAction::from_str("like").unwrap(), SwipeAction::Like);
        assert_eq!(SwipeAction::from_str("Save").unwrap(), SwipeAction::Save);
        assert_eq!(
            SwipeAction::from_str("add_to_trip").unwrap(),
            SwipeAction::AddToTrip
        );
        assert_eq!(
            SwipeAction::from_str("add-to-trip").unwrap(),
            SwipeAction::AddToTrip
        );
        assert_eq!(SwipeAction::from_str("SKIP").unwrap(), SwipeAction::Skip);
        assert!(SwipeAction::from_str("dislike").is_err());
        assert!(SwipeAction::from_str("").is_err());
    }

    #[test]
    fn swipe_action_round_trips_through_str() {
        for action in [
            SwipeAction::Like,
            SwipeAction::Save,
            SwipeAction::AddToTrip,
            SwipeAction::Skip,
        ] {
            assert_eq!(action, action.as_str().parse().unwrap());
        }
    }
}
