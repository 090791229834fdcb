#![cfg_attr(test, deny(warnings))]

//! # tripdeck-core
//!
//! Business rules of the travel-discovery session: repository traits over
//! the selection state and one use case per user-facing operation.

pub mod entities {
    pub use tripdeck_entities::{
        id::*, itinerary::*, poi::*, preferences::*, swipe::*, time::*, trip::*,
    };
}

pub mod db;
pub mod repositories;
pub mod usecases;
