//! The transit graph: arena-owned stations with directed transfer edges.
//!
//! Construction and querying are split across two types:
//!
//! - [`TransitGraphBuilder`] is the under-construction state. The
//!   loader registers stations, then wires transfer edges by id.
//! - [`TransitGraph`] is the sealed state produced by
//!   [`TransitGraphBuilder::build`]. It exposes only read queries, so
//!   a completed graph can be shared across threads freely.
//!
//! Edges are directed. Real-world transfers are usually symmetric, but
//! the graph never symmetrizes on its own; a loader that wants A<->B
//! must insert both directions.

pub mod bfs;

pub use bfs::ShortestPathTree;

use std::collections::HashMap;

use geo::Point;
use tracing::debug;

use crate::identifiers::StationId;
use crate::models::{Result, Station, StationRecord, TransitError};
use crate::spatial::transfer_distance;

/// Stable index of a station in the graph arena.
///
/// Handles are only meaningful for the graph (or builder) that issued
/// them. They stay valid for the lifetime of the graph: stations are
/// never removed once registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StationHandle(pub(crate) usize);

impl StationHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Mutable graph under construction.
#[derive(Default)]
pub struct TransitGraphBuilder {
    stations: Vec<Station>,
    transfers: Vec<Vec<StationHandle>>,
    by_id: HashMap<StationId, StationHandle>,
}

impl TransitGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station, returning its handle.
    ///
    /// Re-registering an id overwrites that station's record and
    /// resets its outgoing transfers; the handle stays the same.
    pub fn add_station(&mut self, record: StationRecord) -> StationHandle {
        let station = Station::from(record);
        match self.by_id.get(&station.id) {
            Some(&handle) => {
                self.stations[handle.0] = station;
                self.transfers[handle.0].clear();
                handle
            }
            None => {
                let handle = StationHandle(self.stations.len());
                self.by_id.insert(station.id.clone(), handle);
                self.stations.push(station);
                self.transfers.push(Vec::new());
                handle
            }
        }
    }

    pub fn contains(&self, id: &StationId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Add a directed transfer edge `from -> to`.
    ///
    /// Both endpoints must already be registered; an unresolved id is
    /// an [`TransitError::UnknownStation`] error rather than a
    /// silently dangling edge.
    pub fn add_transfer(&mut self, from: &StationId, to: &StationId) -> Result<()> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        self.transfers[from.0].push(to);
        Ok(())
    }

    fn resolve(&self, id: &StationId) -> Result<StationHandle> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| TransitError::UnknownStation(id.clone()))
    }

    /// Seal the graph. No mutation is possible afterwards.
    pub fn build(self) -> TransitGraph {
        let edges: usize = self.transfers.iter().map(Vec::len).sum();
        debug!(stations = self.stations.len(), edges, "sealed transit graph");

        TransitGraph {
            stations: self.stations,
            transfers: self.transfers,
            by_id: self.by_id,
        }
    }
}

/// Sealed, query-only transit graph.
///
/// All station data is owned by the graph; adjacency lists hold
/// handles back into the same arena, so no dangling edges can exist.
#[derive(Clone, Debug)]
pub struct TransitGraph {
    stations: Vec<Station>,
    transfers: Vec<Vec<StationHandle>>,
    by_id: HashMap<StationId, StationHandle>,
}

impl TransitGraph {
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn contains(&self, id: &StationId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn handle_of(&self, id: &StationId) -> Option<StationHandle> {
        self.by_id.get(id).copied()
    }

    pub fn get_station(&self, id: &StationId) -> Option<&Station> {
        self.handle_of(id).map(|handle| self.station(handle))
    }

    /// Resolve a handle issued by this graph.
    pub fn station(&self, handle: StationHandle) -> &Station {
        &self.stations[handle.0]
    }

    /// All stations with their handles, in registration order.
    pub fn stations(&self) -> impl Iterator<Item = (StationHandle, &Station)> {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, station)| (StationHandle(i), station))
    }

    /// Outgoing transfers of a station.
    pub fn transfers(&self, handle: StationHandle) -> &[StationHandle] {
        &self.transfers[handle.0]
    }

    /// The registered station nearest to `point` under
    /// [`transfer_distance`], or `None` for an empty graph.
    ///
    /// Linear scan over all stations. Intentionally unindexed: the
    /// station set is small and static, and the stable tie-break
    /// below is part of the contract. When several stations are
    /// equidistant, the first one in registration order wins.
    pub fn find_closest_station(&self, point: Point) -> Option<&Station> {
        let mut closest: Option<(f64, &Station)> = None;
        for station in &self.stations {
            let dist = transfer_distance(point, station.location);
            match closest {
                Some((min, _)) if dist >= min => {}
                _ => closest = Some((dist, station)),
            }
        }
        closest.map(|(_, station)| station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, lat: f64, lon: f64) -> StationRecord {
        StationRecord {
            id: id.into(),
            name: name.into(),
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut builder = TransitGraphBuilder::new();
        builder.add_station(record("127", "Times Sq - 42 St", 40.7553, -73.9877));
        builder.add_station(record("631", "Grand Central - 42 St", 40.7527, -73.9772));
        let graph = builder.build();

        assert_eq!(graph.len(), 2);
        assert!(graph.contains(&StationId::new("127")));
        assert!(!graph.contains(&StationId::new("R23")));

        let station = graph.get_station(&StationId::new("631")).unwrap();
        assert_eq!(&*station.name, "Grand Central - 42 St");
    }

    #[test]
    fn test_reregistration_overwrites_in_place() {
        let mut builder = TransitGraphBuilder::new();
        let first = builder.add_station(record("127", "Times Sq", 40.7553, -73.9877));
        builder.add_station(record("631", "Grand Central", 40.7527, -73.9772));
        builder
            .add_transfer(&StationId::new("127"), &StationId::new("631"))
            .unwrap();

        // Same id again: record replaced, edges reset, handle stable.
        let second = builder.add_station(record("127", "Times Sq - 42 St", 40.7553, -73.9877));
        assert_eq!(first, second);

        let graph = builder.build();
        assert_eq!(graph.len(), 2);
        assert_eq!(&*graph.station(first).name, "Times Sq - 42 St");
        assert!(graph.transfers(first).is_empty());
    }

    #[test]
    fn test_transfer_with_unknown_endpoint_fails() {
        let mut builder = TransitGraphBuilder::new();
        builder.add_station(record("127", "Times Sq", 40.7553, -73.9877));

        let err = builder
            .add_transfer(&StationId::new("127"), &StationId::new("missing"))
            .unwrap_err();
        assert!(matches!(err, TransitError::UnknownStation(id) if id.as_str() == "missing"));

        let err = builder
            .add_transfer(&StationId::new("missing"), &StationId::new("127"))
            .unwrap_err();
        assert!(matches!(err, TransitError::UnknownStation(_)));
    }

    #[test]
    fn test_transfers_are_directed() {
        let mut builder = TransitGraphBuilder::new();
        let a = builder.add_station(record("1", "A", 0.0, 0.0));
        let b = builder.add_station(record("2", "B", 1.0, 1.0));
        builder
            .add_transfer(&StationId::new("1"), &StationId::new("2"))
            .unwrap();
        let graph = builder.build();

        assert_eq!(graph.transfers(a), &[b]);
        assert!(graph.transfers(b).is_empty());
    }

    #[test]
    fn test_closest_station_on_empty_graph() {
        let graph = TransitGraphBuilder::new().build();
        assert!(graph.find_closest_station(Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_closest_station_singleton() {
        let mut builder = TransitGraphBuilder::new();
        builder.add_station(record("127", "Times Sq", 40.7553, -73.9877));
        let graph = builder.build();

        // A lone station is nearest to any query point whatsoever.
        for query in [Point::new(0.0, 0.0), Point::new(-120.0, 85.0)] {
            let station = graph.find_closest_station(query).unwrap();
            assert_eq!(station.id.as_str(), "127");
        }
    }

    #[test]
    fn test_closest_station_picks_minimum() {
        let mut builder = TransitGraphBuilder::new();
        builder.add_station(record("1", "Far", 10.0, 10.0));
        builder.add_station(record("2", "Near", 1.0, 1.0));
        builder.add_station(record("3", "Farther", 20.0, 20.0));
        let graph = builder.build();

        let station = graph.find_closest_station(Point::new(0.0, 0.0)).unwrap();
        assert_eq!(station.id.as_str(), "2");
    }

    #[test]
    fn test_closest_station_tie_break_is_first_registered() {
        let mut builder = TransitGraphBuilder::new();
        // Both at transfer_distance 1.0 from the origin.
        builder.add_station(record("east", "East", 0.0, 1.0));
        builder.add_station(record("north", "North", 1.0, 0.0));
        let graph = builder.build();

        // Deterministic across repeated queries: first registered wins.
        for _ in 0..3 {
            let station = graph.find_closest_station(Point::new(0.0, 0.0)).unwrap();
            assert_eq!(station.id.as_str(), "east");
        }
    }
}
