//! Query tests: secondary lookups and the fare aggregates.

use flight_trips::{Filter, QueryEngine, TripStore};

// ==================== Helpers ====================

fn store_with(trips: &[(&str, &str, &str, &str, u32)]) -> TripStore {
    let mut store = TripStore::new();
    for &(number, origin, destination, carrier, fare) in trips {
        store
            .add_trip(number, origin, destination, carrier, fare)
            .expect("test fixture trips are unique");
    }
    store
}

// ==================== Find by attribute ====================

#[test]
fn find_by_origin_city_returns_all_matches_in_flight_number_order() {
    let store = store_with(&[
        ("AI-858", "Delhi", "Delhi", "Air India", 4800),
        ("AI-855", "Delhi", "Delhi", "Air India", 4500),
        ("AI-856", "Pune", "Delhi", "Air India", 4600),
        ("AI-857", "Delhi", "Chennai", "Air India", 4700),
    ]);
    let engine = QueryEngine::new();

    let matches = engine.find_by_origin_city(&store, "Delhi");
    let numbers: Vec<&str> = matches.iter().map(|r| r.flight_number.as_str()).collect();
    assert_eq!(numbers, ["AI-855", "AI-857", "AI-858"]);
}

#[test]
fn find_by_origin_city_on_unknown_city_is_empty() {
    let store = store_with(&[("AI-855", "Mumbai", "Delhi", "Air India", 4500)]);
    let engine = QueryEngine::new();

    assert!(engine.find_by_origin_city(&store, "Kolkata").is_empty());
}

#[test]
fn find_by_dispatches_on_the_selected_attribute() {
    let store = store_with(&[
        ("AI-855", "Mumbai", "Delhi", "Air India", 4500),
        ("SJ-900", "Delhi", "Mumbai", "Spice", 4550),
    ]);
    let engine = QueryEngine::new();

    let by_destination = engine.find_by(&store, Filter::Destination, "Mumbai");
    assert_eq!(by_destination.len(), 1);
    assert_eq!(by_destination[0].flight_number, "SJ-900");

    let by_carrier = engine.find_by(&store, Filter::Carrier, "Air India");
    assert_eq!(by_carrier.len(), 1);
    assert_eq!(by_carrier[0].flight_number, "AI-855");
}

// ==================== Average fare ====================

#[test]
fn average_fare_truncates_to_whole_units() {
    let store = store_with(&[
        ("AI-855", "Pune", "Delhi", "Air India", 4500),
        ("AI-856", "Pune", "Delhi", "Air India", 4600),
        ("AI-857", "Mumbai", "Chennai", "Air India", 3000),
        ("AI-858", "Banglore", "Delhi", "Air India", 4500),
    ]);
    let engine = QueryEngine::new();

    // (4500 + 4600 + 3000 + 4500) / 4 == 4150
    assert_eq!(engine.average_fare(&store), Some(4150));
}

#[test]
fn average_fare_on_empty_store_is_none() {
    let engine = QueryEngine::new();
    assert_eq!(engine.average_fare(&TripStore::new()), None);
}

// ==================== Max fare by carrier ====================

#[test]
fn max_fare_by_operator_folds_over_that_carrier_only() {
    let store = store_with(&[
        ("AI-855", "Pune", "Delhi", "Air India", 2345),
        ("AI-856", "Pune", "Delhi", "Air India", 7646),
        ("AI-858", "Banglore", "Delhi", "Air India", 9900),
        ("AI-859", "Pune", "Delhi", "Air India", 8233),
        ("SJ-155", "Chennai", "Delhi", "Spice", 6545),
        ("SJ-356", "Pune", "Delhi", "Spice", 7646),
        ("SJ-458", "Banglore", "Delhi", "Spice", 11000),
        ("SJ-855", "Pune", "Delhi", "Spice", 10023),
    ]);
    let engine = QueryEngine::new();

    assert_eq!(engine.max_fare_by_operator(&store, "Air India"), Some(9900));
    assert_eq!(engine.max_fare_by_operator(&store, "Spice"), Some(11000));
}

#[test]
fn max_fare_for_unknown_carrier_is_none() {
    let store = store_with(&[("AI-855", "Pune", "Delhi", "Air India", 2345)]);
    let engine = QueryEngine::new();

    assert_eq!(engine.max_fare_by_operator(&store, "Indigo"), None);
}

// ==================== Min fare between cities ====================

#[test]
fn min_fare_between_cities_folds_over_the_connecting_trips() {
    let store = store_with(&[
        ("AI-855", "Delhi", "Pune", "Air India", 2345),
        ("AI-856", "Pune", "Delhi", "Air India", 7646),
        ("AI-858", "Banglore", "Delhi", "Air India", 5677),
        ("AI-859", "Delhi", "Pune", "Air India", 8233),
        ("SJ-155", "Pune", "Delhi", "Spice", 6545),
        ("SJ-356", "Delhi", "Pune", "Spice", 1000),
        ("SJ-458", "Banglore", "Delhi", "Spice", 4567),
        ("SJ-855", "Pune", "Delhi", "Indigo", 10023),
        ("IG-855", "Pune", "Delhi", "Indigo", 4274),
        ("IG-856", "Delhi", "Pune", "Indigo", 4699),
        ("IG-892", "Delhi", "Banglore", "Indigo", 4699),
    ]);
    let engine = QueryEngine::new();

    assert_eq!(
        engine.min_fare_between_cities(&store, "Delhi", "Pune"),
        Some(1000)
    );
}

#[test]
fn min_fare_between_cities_is_direction_sensitive() {
    let store = store_with(&[
        ("AI-855", "Delhi", "Pune", "Air India", 2345),
        ("AI-856", "Pune", "Delhi", "Air India", 7646),
    ]);
    let engine = QueryEngine::new();

    assert_eq!(
        engine.min_fare_between_cities(&store, "Delhi", "Pune"),
        Some(2345)
    );
    assert_eq!(
        engine.min_fare_between_cities(&store, "Pune", "Delhi"),
        Some(7646)
    );
}

#[test]
fn min_fare_with_no_connecting_trips_is_none() {
    // Both cities exist, but no single trip connects them in this direction
    let store = store_with(&[
        ("AI-856", "Pune", "Delhi", "Air India", 7646),
        ("IG-892", "Delhi", "Banglore", "Indigo", 4699),
    ]);
    let engine = QueryEngine::new();

    assert_eq!(engine.min_fare_between_cities(&store, "Delhi", "Pune"), None);
    assert_eq!(engine.min_fare_between_cities(&store, "Chennai", "Goa"), None);
}

// ==================== Idempotence ====================

#[test]
fn queries_are_idempotent_on_an_unchanged_store() {
    let store = store_with(&[
        ("AI-855", "Delhi", "Pune", "Air India", 2345),
        ("AI-856", "Pune", "Delhi", "Air India", 7646),
        ("SJ-356", "Delhi", "Pune", "Spice", 1000),
    ]);
    let engine = QueryEngine::new();

    let first: Vec<String> = engine
        .find_by_origin_city(&store, "Delhi")
        .iter()
        .map(|r| r.flight_number.clone())
        .collect();
    let second: Vec<String> = engine
        .find_by_origin_city(&store, "Delhi")
        .iter()
        .map(|r| r.flight_number.clone())
        .collect();
    assert_eq!(first, second);

    assert_eq!(
        engine.min_fare_between_cities(&store, "Delhi", "Pune"),
        engine.min_fare_between_cities(&store, "Delhi", "Pune")
    );
    assert_eq!(
        engine.max_fare_by_operator(&store, "Air India"),
        engine.max_fare_by_operator(&store, "Air India")
    );
    assert_eq!(engine.average_fare(&store), engine.average_fare(&store));
}
