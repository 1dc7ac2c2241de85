//! Station entities and the error taxonomy.

pub mod station;
pub mod types;

pub use station::{Station, StationRecord};
pub use types::{Result, TransitError};
