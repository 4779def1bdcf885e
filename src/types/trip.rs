//! The trip record — the atomic unit stored by the database.

use serde::{Deserialize, Serialize};

/// A single flight trip record.
///
/// The flight number is the record's identity and never changes after
/// construction; the fare is the only field that can be updated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    /// Unique flight number, e.g. "AI-855".
    pub flight_number: String,
    /// City the flight departs from.
    pub origin: String,
    /// City the flight arrives at.
    pub destination: String,
    /// Operating carrier, e.g. "Air India".
    pub carrier: String,
    /// Ticket fare in whole currency units.
    pub fare: u32,
}

impl TripRecord {
    /// Create a new trip record.
    pub fn new(
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        carrier: impl Into<String>,
        fare: u32,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            origin: origin.into(),
            destination: destination.into(),
            carrier: carrier.into(),
            fare,
        }
    }

    /// Update the fare in place. Fare participates in no index, so this
    /// has no side effects beyond the field write.
    pub fn set_fare(&mut self, fare: u32) {
        self.fare = fare;
    }
}

/// Equality is identity equality: two records are equal iff their flight
/// numbers match, regardless of the other fields.
impl PartialEq for TripRecord {
    fn eq(&self, other: &Self) -> bool {
        self.flight_number == other.flight_number
    }
}

impl Eq for TripRecord {}

impl std::fmt::Display for TripRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Flight Number: {}\tOrigin City: {}\tDestination City: {}\tCarrier: {}\tFare: {}",
            self.flight_number, self.origin, self.destination, self.carrier, self.fare
        )
    }
}
