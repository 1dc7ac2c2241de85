//! Station entity and the loader-facing record it is built from.

use std::fmt;
use std::sync::Arc;

use geo::Point;

use crate::identifiers::StationId;

/// Raw station fields as produced by the loader.
///
/// The loader owns all source-format parsing (delimited text, GTFS
/// stops, whatever); the graph builder only ever sees these records.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A station in the transit graph.
///
/// Stations are owned exclusively by the graph arena; adjacency is
/// stored on the graph as handles, not on the station itself.
#[derive(Clone, Debug)]
pub struct Station {
    pub id: StationId,
    pub name: Arc<str>,
    /// x = longitude, y = latitude (geo convention).
    pub location: Point,
}

impl From<StationRecord> for Station {
    fn from(record: StationRecord) -> Self {
        Self {
            id: StationId::new(record.id),
            name: record.name.into(),
            location: Point::new(record.longitude, record.latitude),
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.id)
    }
}
