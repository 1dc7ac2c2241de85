//! # train-route-transit
//!
//! In-memory model of a transit network: stations with coordinates,
//! directed transfer edges, and two independent queries over them.
//!
//! ## Features
//!
//! - **Build once, query forever**: a builder registers stations and
//!   transfer edges, then seals into an immutable [`TransitGraph`]
//! - **Shortest paths**: unweighted BFS from any source station,
//!   with per-station hop counts, predecessors, and path
//!   reconstruction
//! - **Nearest station**: linear scan for the station closest to an
//!   arbitrary coordinate, with stable first-registered tie-breaking
//!
//! Loading (file parsing) and reporting (printing) are external
//! collaborators; this crate only consumes [`StationRecord`]s and
//! hands back query results.
//!
//! ## Example
//!
//! ```
//! use train_route_transit::prelude::*;
//! use geo::Point;
//!
//! let mut builder = TransitGraphBuilder::new();
//! builder.add_station(StationRecord {
//!     id: "127".into(),
//!     name: "Times Sq - 42 St".into(),
//!     latitude: 40.7553,
//!     longitude: -73.9877,
//! });
//! builder.add_station(StationRecord {
//!     id: "631".into(),
//!     name: "Grand Central - 42 St".into(),
//!     latitude: 40.7527,
//!     longitude: -73.9772,
//! });
//! builder.add_transfer(&StationId::new("127"), &StationId::new("631"))?;
//! let graph = builder.build();
//!
//! // Hops from Times Sq to every reachable station
//! let tree = graph.shortest_paths_from(&StationId::new("127"))?;
//! let grand_central = graph.handle_of(&StationId::new("631")).unwrap();
//! assert_eq!(tree.distance(grand_central), Some(1));
//!
//! // Which station is closest to a rider's position?
//! let nearest = graph.find_closest_station(Point::new(-73.99, 40.75)).unwrap();
//! assert_eq!(nearest.id.as_str(), "127");
//! # Ok::<(), train_route_transit::TransitError>(())
//! ```

pub mod graph;
pub mod identifiers;
pub mod models;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::graph::{
        ShortestPathTree, StationHandle, TransitGraph, TransitGraphBuilder,
    };
    pub use crate::identifiers::StationId;
    pub use crate::models::{Result, Station, StationRecord, TransitError};
    pub use crate::spatial::transfer_distance;
}

pub use prelude::*;
