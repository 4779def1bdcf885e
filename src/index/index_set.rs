//! Index set — the three secondary indexes behind one selector-keyed surface.

use serde::Serialize;

use super::attribute_index::AttributeIndex;
use crate::types::TripRecord;

/// Selects which secondary index an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Filter {
    /// Index by origin city.
    Origin = 0,
    /// Index by destination city.
    Destination = 1,
    /// Index by operating carrier.
    Carrier = 2,
}

impl Filter {
    /// Every filter, in selector order.
    pub const ALL: [Filter; 3] = [Filter::Origin, Filter::Destination, Filter::Carrier];

    /// Return a human-readable name for this filter.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Destination => "destination",
            Self::Carrier => "carrier",
        }
    }

    /// Parse a filter from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "origin" => Some(Self::Origin),
            "destination" => Some(Self::Destination),
            "carrier" => Some(Self::Carrier),
            _ => None,
        }
    }

    /// The attribute value this filter indexes, read from a record.
    pub fn value_of<'a>(&self, record: &'a TripRecord) -> &'a str {
        match self {
            Self::Origin => &record.origin,
            Self::Destination => &record.destination,
            Self::Carrier => &record.carrier,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One attribute index per filter, dispatched by an explicit selector.
///
/// Owns the origin, destination and carrier indexes. Stateless beyond
/// that ownership; cross-index logic (intersection, dereferencing) lives
/// in the query engine.
#[derive(Debug)]
pub struct IndexSet {
    origin: AttributeIndex,
    destination: AttributeIndex,
    carrier: AttributeIndex,
}

impl IndexSet {
    /// Create a new set of empty indexes.
    pub fn new() -> Self {
        Self {
            origin: AttributeIndex::new(),
            destination: AttributeIndex::new(),
            carrier: AttributeIndex::new(),
        }
    }

    /// Get the index selected by a filter.
    pub fn index(&self, filter: Filter) -> &AttributeIndex {
        match filter {
            Filter::Origin => &self.origin,
            Filter::Destination => &self.destination,
            Filter::Carrier => &self.carrier,
        }
    }

    fn index_mut(&mut self, filter: Filter) -> &mut AttributeIndex {
        match filter {
            Filter::Origin => &mut self.origin,
            Filter::Destination => &mut self.destination,
            Filter::Carrier => &mut self.carrier,
        }
    }

    /// Insert a (value, key) pair into the selected index.
    pub fn add(&mut self, filter: Filter, value: &str, key: impl Into<String>) {
        self.index_mut(filter).add(value, key);
    }

    /// Get all flight numbers stored under a value in the selected index.
    pub fn lookup(&self, filter: Filter, value: &str) -> &[String] {
        self.index(filter).get(value)
    }

    /// Remove one (value, key) pair from the selected index.
    pub fn remove(&mut self, filter: Filter, value: &str, key: &str) -> bool {
        self.index_mut(filter).remove(value, key)
    }

    /// Populate every index with a record's own attribute values.
    pub fn insert_record(&mut self, record: &TripRecord) {
        for filter in Filter::ALL {
            self.add(filter, filter.value_of(record), record.flight_number.clone());
        }
    }

    /// Remove a record's entries from every index.
    pub fn remove_record(&mut self, record: &TripRecord) {
        for filter in Filter::ALL {
            self.remove(filter, filter.value_of(record), &record.flight_number);
        }
    }

    /// Rebuild all three indexes from scratch.
    pub fn rebuild<'a>(&mut self, records: impl Iterator<Item = &'a TripRecord>) {
        self.clear();
        for record in records {
            self.insert_record(record);
        }
    }

    /// Clear all three indexes.
    pub fn clear(&mut self) {
        self.origin.clear();
        self.destination.clear();
        self.carrier.clear();
    }
}

impl Default for IndexSet {
    fn default() -> Self {
        Self::new()
    }
}
