use std::str::FromStr;

use anyhow::{anyhow, Result};

use tripdeck_application::{prelude::*, AppError};
use tripdeck_core::{
    entities::*,
    repositories::{self, CatalogRepo, TripRepo},
    usecases::{self, AddToTripOutcome, SwipeOutcome},
};
use tripdeck_db_json::JsonStore;

use crate::{cli::Command, config::Config};

pub fn run(cfg: &Config, command: Command) -> Result<()> {
    let catalog = Catalog::builtin();
    let db = JsonStore::load_or_default(&cfg.storage.file);

    // Stored preferences route straight to the feed; without them every
    // screen points back to onboarding.
    if !matches!(command, Command::Onboard { .. }) && !has_completed_onboarding(&db)? {
        println!("Welcome to Tripdeck. Run `tripdeck onboard` first to pick your travel preferences.");
        return Ok(());
    }

    match command {
        Command::Onboard {
            budget,
            interests,
            styles,
        } => onboard(&db, &budget, interests, styles),
        Command::Feed { category } => show_feed(&catalog, category.as_deref()),
        Command::Swipe { poi_id, action } => apply_gesture(&catalog, &db, &poi_id, &action),
        Command::Library => show_library(&db),
        Command::SaveToTrip { poi_id } => save_to_trip(&db, &poi_id),
        Command::RemoveSaved { poi_id } => remove_saved(&db, &poi_id),
        Command::Trips => show_trips(&db),
        Command::Itinerary { trip_id, json } => show_itinerary(&db, &trip_id, json),
        Command::RemoveTrip { trip_id } => delete_trip(&db, &trip_id),
        Command::RemoveTripItem { trip_id, poi_id } => delete_trip_item(&db, &trip_id, &poi_id),
        Command::Import => run_simulated_import(&db, cfg),
        Command::Prefs => show_prefs(&db),
    }
}

fn is_not_found(err: &AppError) -> bool {
    matches!(
        err,
        AppError::Business(usecases::Error::Repo(repositories::Error::NotFound))
    )
}

fn onboard(db: &JsonStore, budget: &str, interests: Vec<String>, styles: Vec<String>) -> Result<()> {
    let budget = BudgetRange::from_str(budget)
        .map_err(|_| anyhow!("unknown budget: {budget} (expected economy, standard or luxury)"))?;
    complete_onboarding(
        db,
        UserPreferences {
            budget,
            interests,
            travel_style: styles,
        },
    )?;
    println!("Preferences saved. Browse the feed with `tripdeck feed`.");
    Ok(())
}

fn show_feed(catalog: &Catalog, category: Option<&str>) -> Result<()> {
    let category = category
        .map(|c| {
            Category::from_str(c)
                .map_err(|_| anyhow!("unknown category: {c} (expected stay, food, activity, transport or nightlife)"))
        })
        .transpose()?;
    let mut cards = catalog.all_pois()?;
    if let Some(category) = category {
        cards.retain(|card| card.category == category);
    }
    for card in &cards {
        println!(
            "{:<10} {:<10} {:<32} {:<14} {}",
            card.id.as_str(),
            card.category.to_string(),
            card.title,
            card.city,
            card.price_range
        );
    }
    println!("{} cards", cards.len());
    Ok(())
}

fn apply_gesture(catalog: &Catalog, db: &JsonStore, poi_id: &str, action: &str) -> Result<()> {
    let action = SwipeAction::from_str(action)
        .map_err(|_| anyhow!("unknown action: {action} (expected like, save, add-to-trip or skip)"))?;
    match swipe(catalog, db, poi_id, action)? {
        SwipeOutcome::Recorded => println!("Noted."),
        SwipeOutcome::SavedToLibrary => println!("Saved to your library."),
        SwipeOutcome::AlreadySaved => println!("Already in your library."),
        SwipeOutcome::AddedToTrip(trip_id) => {
            let trip = db.get_trip(trip_id.as_str())?;
            println!("Added to {} ({} places).", trip.name, trip.items.len());
        }
        SwipeOutcome::AlreadyInTrip(trip_id) => {
            let trip = db.get_trip(trip_id.as_str())?;
            println!("Already in {}.", trip.name);
        }
        SwipeOutcome::UnknownPoi => {
            println!("That card is no longer in the catalog; nothing recorded.")
        }
    }
    Ok(())
}

fn show_library(db: &JsonStore) -> Result<()> {
    let groups = saved_library(db)?;
    if groups.is_empty() {
        println!("Nothing saved yet. Save places from your feed to see them here.");
        return Ok(());
    }
    for group in &groups {
        println!("{} ({})", group.city, group.items.len());
        for item in &group.items {
            println!("  {:<10} {:<32} {}", item.id.as_str(), item.title, item.zone);
        }
    }
    Ok(())
}

fn save_to_trip(db: &JsonStore, poi_id: &str) -> Result<()> {
    match add_saved_to_trip(db, poi_id)? {
        Some(outcome) => {
            let trip = db.get_trip(outcome.trip_id().as_str())?;
            match outcome {
                AddToTripOutcome::AlreadyPresent(_) => println!("Already in {}.", trip.name),
                _ => println!("Added to {} ({} places).", trip.name, trip.items.len()),
            }
        }
        None => println!("No saved item {poi_id}."),
    }
    Ok(())
}

fn remove_saved(db: &JsonStore, poi_id: &str) -> Result<()> {
    match remove_from_library(db, poi_id) {
        Ok(()) => println!("Removed from your library."),
        Err(err) if is_not_found(&err) => println!("No saved item {poi_id}."),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn show_trips(db: &JsonStore) -> Result<()> {
    let trips = all_trips(db)?;
    if trips.is_empty() {
        println!("No trips yet. Swipe add-to-trip on a card to start one.");
        return Ok(());
    }
    for trip in &trips {
        println!(
            "{:<34} {:<24} {} places",
            trip.id.as_str(),
            trip.name,
            trip.items.len()
        );
    }
    Ok(())
}

fn show_itinerary(db: &JsonStore, trip_id: &str, as_json: bool) -> Result<()> {
    let entries = match trip_itinerary(db, trip_id) {
        Ok(entries) => entries,
        Err(err) if is_not_found(&err) => {
            println!("No trip {trip_id}.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    if as_json {
        println!("{}", itinerary_json(entries)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("This trip has no places yet.");
        return Ok(());
    }
    for day in group_by_day(entries) {
        println!("Day {}", day.day);
        for entry in &day.entries {
            println!(
                "  {:<10} {:<32} ({}, {})",
                entry.slot.to_string(),
                entry.poi.title,
                entry.poi.zone,
                entry.poi.city
            );
        }
    }
    Ok(())
}

fn delete_trip(db: &JsonStore, trip_id: &str) -> Result<()> {
    match remove_trip(db, trip_id) {
        Ok(()) => println!("Trip removed."),
        Err(err) if is_not_found(&err) => println!("No trip {trip_id}."),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn delete_trip_item(db: &JsonStore, trip_id: &str, poi_id: &str) -> Result<()> {
    match remove_trip_item(db, trip_id, poi_id) {
        Ok(true) => println!("Removed from the trip."),
        Ok(false) => println!("That trip holds no item {poi_id}."),
        Err(err) if is_not_found(&err) => println!("No trip {trip_id}."),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn run_simulated_import(db: &JsonStore, cfg: &Config) -> Result<()> {
    println!("Importing shared locations...");
    let outcomes = run_import(db, instagram_import_batch(), cfg.import.simulated_delay)?;
    let added = outcomes
        .iter()
        .filter(|o| !matches!(o, AddToTripOutcome::AlreadyPresent(_)))
        .count();
    println!(
        "{} locations extracted, {added} added to your trips.",
        outcomes.len()
    );
    Ok(())
}

fn show_prefs(db: &JsonStore) -> Result<()> {
    match stored_preferences(db)? {
        Some(prefs) => {
            println!("Budget: {}", prefs.budget);
            println!("Interests: {}", prefs.interests.join(", "));
            println!("Travel style: {}", prefs.travel_style.join(", "));
        }
        None => println!("No preferences stored yet."),
    }
    Ok(())
}
