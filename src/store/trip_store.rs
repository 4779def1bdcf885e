//! Core store — the primary keyed map plus its secondary indexes.

use std::collections::BTreeMap;

use log::debug;

use crate::index::IndexSet;
use crate::types::{TripError, TripRecord, TripResult};

/// The in-memory trip store.
///
/// Owns the primary map (flight number -> record, ordered by flight
/// number) and one index set. Every mutation goes through this type, which
/// keeps the primary map and the indexes in agreement: a flight number is
/// reachable through an index iff it is present in the primary map.
#[derive(Debug)]
pub struct TripStore {
    /// All trips, keyed and ordered by flight number.
    trips: BTreeMap<String, TripRecord>,
    /// Secondary indexes over origin, destination and carrier.
    indexes: IndexSet,
}

impl TripStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            trips: BTreeMap::new(),
            indexes: IndexSet::new(),
        }
    }

    /// Build a store from pre-existing records (used by the dataset
    /// loader). Fails on the first duplicate flight number.
    pub fn from_records(records: Vec<TripRecord>) -> TripResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Number of stored trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Whether a trip with this flight number is stored.
    pub fn contains(&self, flight_number: &str) -> bool {
        self.trips.contains_key(flight_number)
    }

    /// Get a trip by flight number.
    pub fn get(&self, flight_number: &str) -> Option<&TripRecord> {
        self.trips.get(flight_number)
    }

    /// All trips in flight-number order.
    pub fn trips(&self) -> impl Iterator<Item = &TripRecord> {
        self.trips.values()
    }

    /// Add a new trip.
    ///
    /// Fails with [`TripError::DuplicateTrip`] if the flight number is
    /// already stored; the duplicate check gates the index updates, so a
    /// failed add leaves no partial state. On success the record lands in
    /// the primary map and in all three secondary indexes.
    pub fn add_trip(
        &mut self,
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        carrier: impl Into<String>,
        fare: u32,
    ) -> TripResult<()> {
        self.insert(TripRecord::new(
            flight_number,
            origin,
            destination,
            carrier,
            fare,
        ))
    }

    /// Insert a pre-built record. Same contract as [`TripStore::add_trip`].
    pub fn insert(&mut self, record: TripRecord) -> TripResult<()> {
        if self.trips.contains_key(&record.flight_number) {
            return Err(TripError::DuplicateTrip(record.flight_number));
        }

        self.indexes.insert_record(&record);
        debug!("added trip {}", record.flight_number);
        self.trips.insert(record.flight_number.clone(), record);

        Ok(())
    }

    /// Remove a trip, returning the removed record.
    ///
    /// Fails with [`TripError::TripNotFound`] if absent. On success the
    /// record leaves the primary map and all three secondary indexes, so
    /// no query can resolve a dangling flight number afterwards.
    pub fn remove_trip(&mut self, flight_number: &str) -> TripResult<TripRecord> {
        let removed = self
            .trips
            .remove(flight_number)
            .ok_or_else(|| TripError::TripNotFound(flight_number.to_string()))?;

        self.indexes.remove_record(&removed);
        debug!("removed trip {}", removed.flight_number);

        Ok(removed)
    }

    /// Update a trip's fare in place.
    ///
    /// Fails with [`TripError::TripNotFound`] if absent. Fare participates
    /// in no index, so no index is touched.
    pub fn update_fare(&mut self, flight_number: &str, fare: u32) -> TripResult<()> {
        let record = self
            .trips
            .get_mut(flight_number)
            .ok_or_else(|| TripError::TripNotFound(flight_number.to_string()))?;

        record.set_fare(fare);
        debug!("updated fare of trip {} to {}", flight_number, fare);

        Ok(())
    }

    /// Get the secondary indexes.
    pub fn indexes(&self) -> &IndexSet {
        &self.indexes
    }
}

impl Default for TripStore {
    fn default() -> Self {
        Self::new()
    }
}
