use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tripdeck", version, about = "Swipe, save and schedule travel finds")]
pub struct Cli {
    /// Configuration file (defaults to tripdeck.toml).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Complete onboarding by picking travel preferences.
    Onboard {
        /// Budget bracket: economy, standard or luxury.
        #[arg(long, default_value = "standard")]
        budget: String,
        /// Interest tags, repeatable.
        #[arg(long = "interest", value_name = "TAG")]
        interests: Vec<String>,
        /// Travel style tags, repeatable.
        #[arg(long = "style", value_name = "TAG")]
        styles: Vec<String>,
    },
    /// Browse the discovery feed.
    Feed {
        /// Only show cards of this category.
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
    },
    /// Apply a gesture to a feed card: like, save, add-to-trip or skip.
    Swipe {
        poi_id: String,
        action: String,
    },
    /// Show the saved library, grouped by city.
    Library,
    /// Move a saved item into its destination trip.
    SaveToTrip {
        poi_id: String,
    },
    /// Remove an item from the saved library.
    RemoveSaved {
        poi_id: String,
    },
    /// List all trips.
    Trips,
    /// Show the generated day-by-day itinerary of a trip.
    Itinerary {
        trip_id: String,
        /// Emit the itinerary as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Remove a whole trip.
    RemoveTrip {
        trip_id: String,
    },
    /// Remove a single item from a trip.
    RemoveTripItem {
        trip_id: String,
        poi_id: String,
    },
    /// Import shared locations and add them to the trip selection.
    Import,
    /// Show the stored travel preferences.
    Prefs,
}
