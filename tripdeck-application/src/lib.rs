#[macro_use]
extern crate log;

mod catalog;
mod error;
mod import;
mod itinerary;
mod library;
mod onboarding;
mod swipe;
mod trips;

pub mod prelude {
    pub use super::{
        catalog::*, import::*, itinerary::*, library::*, onboarding::*, swipe::*, trips::*,
    };
}

pub use self::error::AppError;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use tripdeck_core::{db::*, entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;
