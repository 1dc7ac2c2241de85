//! Spatial utilities for nearest-station queries.

pub mod queries;

pub use queries::transfer_distance;
