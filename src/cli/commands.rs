//! CLI command implementations.

use std::path::Path;

use crate::engine::QueryEngine;
use crate::index::Filter;
use crate::store::TripStore;
use crate::types::{TripError, TripRecord, TripResult};

/// Load a JSON dataset file into a fresh store.
///
/// The dataset is a JSON array of trip records. Duplicate flight numbers
/// in a dataset are an error, not a silent overwrite.
pub fn load_dataset(path: &Path) -> TripResult<TripStore> {
    let raw = std::fs::read_to_string(path)?;
    let records: Vec<TripRecord> = serde_json::from_str(&raw)?;
    TripStore::from_records(records)
}

/// Display summary information about a dataset.
pub fn cmd_info(path: &Path, json: bool) -> TripResult<()> {
    let store = load_dataset(path)?;
    let engine = QueryEngine::new();
    let average = engine.average_fare(&store);

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "trips": store.len(),
            "origins": store.indexes().index(Filter::Origin).key_count(),
            "destinations": store.indexes().index(Filter::Destination).key_count(),
            "carriers": store.indexes().index(Filter::Carrier).key_count(),
            "average_fare": average,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Trips: {}", store.len());
        println!(
            "Origins: {}",
            store.indexes().index(Filter::Origin).key_count()
        );
        println!(
            "Destinations: {}",
            store.indexes().index(Filter::Destination).key_count()
        );
        println!(
            "Carriers: {}",
            store.indexes().index(Filter::Carrier).key_count()
        );
        match average {
            Some(fare) => println!("Average fare: {}", fare),
            None => println!("Average fare: n/a"),
        }
    }
    Ok(())
}

/// List every trip in flight-number order.
pub fn cmd_list(path: &Path, json: bool) -> TripResult<()> {
    let store = load_dataset(path)?;

    if json {
        let trips: Vec<&TripRecord> = store.trips().collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&trips).unwrap_or_default()
        );
    } else {
        println!("Flight Details:");
        for record in store.trips() {
            println!("{}", record);
        }
    }
    Ok(())
}

/// Look up a single trip by flight number.
pub fn cmd_find(path: &Path, flight_number: &str, json: bool) -> TripResult<()> {
    let store = load_dataset(path)?;
    let record = store
        .get(flight_number)
        .ok_or_else(|| TripError::TripNotFound(flight_number.to_string()))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(record).unwrap_or_default()
        );
    } else {
        println!("{}", record);
    }
    Ok(())
}

/// Find all trips matching one attribute value.
pub fn cmd_search(path: &Path, filter: Filter, value: &str, json: bool) -> TripResult<()> {
    let store = load_dataset(path)?;
    let engine = QueryEngine::new();
    let matches = engine.find_by(&store, filter, value);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&matches).unwrap_or_default()
        );
    } else if matches.is_empty() {
        println!("No trips with {} {}", filter, value);
    } else {
        for record in matches {
            println!("{}", record);
        }
    }
    Ok(())
}

/// Highest fare among a carrier's trips.
pub fn cmd_max_fare(path: &Path, carrier: &str, json: bool) -> TripResult<()> {
    let store = load_dataset(path)?;
    let engine = QueryEngine::new();
    let max = engine.max_fare_by_operator(&store, carrier);

    if json {
        println!("{}", serde_json::json!({"carrier": carrier, "max_fare": max}));
    } else {
        match max {
            Some(fare) => println!("Max fare for {}: {}", carrier, fare),
            None => println!("No trips operated by {}", carrier),
        }
    }
    Ok(())
}

/// Lowest fare on a direct connection between two cities.
pub fn cmd_min_fare(path: &Path, origin: &str, destination: &str, json: bool) -> TripResult<()> {
    let store = load_dataset(path)?;
    let engine = QueryEngine::new();
    let min = engine.min_fare_between_cities(&store, origin, destination);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "origin": origin,
                "destination": destination,
                "min_fare": min,
            })
        );
    } else {
        match min {
            Some(fare) => println!("Min fare {} -> {}: {}", origin, destination, fare),
            None => println!("No route from {} to {}", origin, destination),
        }
    }
    Ok(())
}

/// Integer-truncating average fare over the whole dataset.
pub fn cmd_average(path: &Path, json: bool) -> TripResult<()> {
    let store = load_dataset(path)?;
    let engine = QueryEngine::new();
    let average = engine.average_fare(&store);

    if json {
        println!("{}", serde_json::json!({"average_fare": average}));
    } else {
        match average {
            Some(fare) => println!("Average fare: {}", fare),
            None => println!("Store is empty"),
        }
    }
    Ok(())
}
