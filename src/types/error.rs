//! Error types for the flight trip store.

use thiserror::Error;

/// All errors that can occur in the flight trip store.
#[derive(Error, Debug)]
pub enum TripError {
    /// A trip with this flight number is already stored.
    #[error("Trip {0} already exists")]
    DuplicateTrip(String),

    /// No trip with this flight number is stored.
    #[error("Trip {0} not found")]
    TripNotFound(String),

    /// IO error while reading a dataset file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A dataset file failed to parse.
    #[error("Dataset parse error: {0}")]
    Dataset(#[from] serde_json::Error),
}

/// Convenience result type for trip store operations.
pub type TripResult<T> = Result<T, TripError>;
