//! Query executor — secondary lookups and aggregate folds.

use crate::index::{intersect_sorted, Filter};
use crate::store::TripStore;
use crate::types::TripRecord;

/// The query engine supports all derived query operations.
///
/// Every query resolves candidate flight numbers through one or two
/// secondary indexes and dereferences them against the primary map,
/// skipping any candidate the primary map no longer holds. Aggregates
/// return `None` instead of a sentinel fare when nothing matches.
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Find all trips whose selected attribute equals `value`.
    ///
    /// Results follow the index bucket order, i.e. ascending by flight
    /// number.
    pub fn find_by<'a>(
        &self,
        store: &'a TripStore,
        filter: Filter,
        value: &str,
    ) -> Vec<&'a TripRecord> {
        store
            .indexes()
            .lookup(filter, value)
            .iter()
            .filter_map(|flight_number| store.get(flight_number))
            .collect()
    }

    /// Find all trips departing from an origin city.
    pub fn find_by_origin_city<'a>(
        &self,
        store: &'a TripStore,
        origin: &str,
    ) -> Vec<&'a TripRecord> {
        self.find_by(store, Filter::Origin, origin)
    }

    /// Highest fare among a carrier's trips, or `None` if the carrier has
    /// no trips stored.
    pub fn max_fare_by_operator(&self, store: &TripStore, carrier: &str) -> Option<u32> {
        self.find_by(store, Filter::Carrier, carrier)
            .iter()
            .map(|record| record.fare)
            .max()
    }

    /// Lowest fare on a direct connection from `origin` to `destination`,
    /// or `None` if no stored trip connects the two cities.
    ///
    /// Candidates come from the origin and destination indexes; both
    /// buckets are sorted by flight number, so their intersection is a
    /// plain two-pointer walk.
    pub fn min_fare_between_cities(
        &self,
        store: &TripStore,
        origin: &str,
        destination: &str,
    ) -> Option<u32> {
        let from_origin = store.indexes().lookup(Filter::Origin, origin);
        let to_destination = store.indexes().lookup(Filter::Destination, destination);

        intersect_sorted(from_origin, to_destination)
            .iter()
            .filter_map(|flight_number| store.get(flight_number))
            .map(|record| record.fare)
            .min()
    }

    /// Integer-truncating average fare over every stored trip, or `None`
    /// on an empty store.
    pub fn average_fare(&self, store: &TripStore) -> Option<u32> {
        if store.is_empty() {
            return None;
        }

        let total: u64 = store.trips().map(|record| u64::from(record.fare)).sum();

        Some((total / store.len() as u64) as u32)
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}
