//! Error types for graph construction and queries.

use crate::identifiers::StationId;

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    /// Shortest-path search was asked to start from a station that is
    /// not a member of the graph. No traversal is performed.
    #[error("Invalid source station: {0}")]
    InvalidSource(StationId),

    /// A transfer edge referenced an id that was never registered.
    /// Surfaced to the loader instead of admitting a dangling edge.
    #[error("Unknown station in transfer: {0}")]
    UnknownStation(StationId),
}

pub type Result<T> = std::result::Result<T, TransitError>;
