mod add_to_trip;
mod apply_swipe;
mod error;
mod generate_itinerary;
mod import_batch;
mod load_library;
mod remove_from_library;
mod remove_trip;
mod remove_trip_item;
mod store_preferences;

#[cfg(test)]
pub mod tests;

pub use self::{
    add_to_trip::*, apply_swipe::*, error::Error, generate_itinerary::*, import_batch::*,
    load_library::*, remove_from_library::*, remove_trip::*, remove_trip_item::*,
    store_preferences::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
