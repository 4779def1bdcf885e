//! All data types for the flight trip store.

pub mod error;
pub mod trip;

pub use error::{TripError, TripResult};
pub use trip::TripRecord;
