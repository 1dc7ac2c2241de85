//! Unweighted shortest paths via breadth-first search.
//!
//! Edges carry no weights, so first discovery order corresponds to
//! minimum hop count: every reachable station is visited exactly once,
//! at the moment its shortest distance from the source is known.

use std::collections::VecDeque;

use tracing::debug;

use super::{StationHandle, TransitGraph};
use crate::identifiers::StationId;
use crate::models::{Result, TransitError};

/// Result of one breadth-first search: per-station distance and
/// predecessor, indexed by handle.
///
/// A station whose distance is `None` was not reached from the source
/// and has no predecessor; [`ShortestPathTree::reachable`] skips such
/// stations. The tree is a plain value, detached from the graph that
/// produced it.
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    source: StationHandle,
    distance: Vec<Option<u32>>,
    predecessor: Vec<Option<StationHandle>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> StationHandle {
        self.source
    }

    /// Hop count from the source, or `None` if unreachable.
    pub fn distance(&self, station: StationHandle) -> Option<u32> {
        self.distance[station.0]
    }

    /// Previous station on a shortest path from the source. `None`
    /// for the source itself and for unreachable stations.
    pub fn predecessor(&self, station: StationHandle) -> Option<StationHandle> {
        self.predecessor[station.0]
    }

    /// Stations reached from the source, in arena order.
    pub fn reachable(&self) -> impl Iterator<Item = StationHandle> + '_ {
        self.distance
            .iter()
            .enumerate()
            .filter_map(|(i, dist)| dist.map(|_| StationHandle(i)))
    }

    /// Reconstruct the source-to-target path, or `None` if the target
    /// was not reached.
    ///
    /// Predecessor links point backward toward the source, so the walk
    /// stacks stations target-first and then reverses into
    /// presentation order. The result always starts at the source and
    /// ends at the target, with `distance(target) + 1` entries.
    pub fn path_to(&self, target: StationHandle) -> Option<Vec<StationHandle>> {
        self.distance[target.0]?;

        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(station) = current {
            path.push(station);
            current = self.predecessor[station.0];
        }
        path.reverse();
        Some(path)
    }
}

impl TransitGraph {
    /// Run BFS from the station with the given id.
    ///
    /// Fails with [`TransitError::InvalidSource`] when the id is not a
    /// graph member; no traversal is performed in that case.
    pub fn shortest_paths_from(&self, source: &StationId) -> Result<ShortestPathTree> {
        let handle = self
            .handle_of(source)
            .ok_or_else(|| TransitError::InvalidSource(source.clone()))?;
        Ok(self.shortest_paths(handle))
    }

    /// Run BFS from `source`, producing minimum-hop distances and a
    /// predecessor map covering every station in the graph.
    pub fn shortest_paths(&self, source: StationHandle) -> ShortestPathTree {
        debug!(source = %self.station(source).id, "running shortest-path search");

        let mut distance = vec![None; self.len()];
        let mut predecessor = vec![None; self.len()];
        let mut queue = VecDeque::new();

        distance[source.0] = Some(0);
        queue.push_back(source);

        while let Some(cur) = queue.pop_front() {
            // Every enqueued station has a distance by construction.
            let Some(hops) = distance[cur.0] else { continue };
            for &neighbor in self.transfers(cur) {
                if distance[neighbor.0].is_none() {
                    distance[neighbor.0] = Some(hops + 1);
                    predecessor[neighbor.0] = Some(cur);
                    queue.push_back(neighbor);
                }
            }
        }

        ShortestPathTree {
            source,
            distance,
            predecessor,
        }
    }
}
