//! A crate to build Probabilistic Roadmaps (PRM) over a planar environment.
//!
//! A roadmap is a sparse graph over sampled points of the free space of a map
//! populated with axis-aligned rectangular [`Obstacle`]s. It is meant to be
//! consumed by a path search (Dijkstra, A*, ...), which is not part of this crate.
//! Neither is the sampling of the points.
//!
//! Construction is a single pass:
//! 1. samples inside any obstacle are dropped ([`filter_samples`])
//! 2. a full distance matrix is computed and every row is reduced to its
//!    `k` nearest neighbors ([`NeighborGraphBuilder`])
//! 3. every remaining edge that crosses an obstacle is removed
//!    ([`EdgeCollisionFilter`])
//!
//! ## Example
//! ```
//! use prm_roadmap::prelude::*;
//!
//! let samples = vec![(0, 0), (10, 0), (0, 10), (10, 10), (5, 5)];
//! let obstacles = [Obstacle::new((4, 4), (6, 6)).unwrap()];
//!
//! let roadmap = Roadmap::new(samples, &obstacles, RoadmapConfig::with_k(3));
//!
//! // (5, 5) lies inside the obstacle
//! assert_eq!(roadmap.node_count(), 4);
//!
//! let adjacency = roadmap.adjacency();
//! assert_eq!(adjacency[(0, 1)], 1);
//!
//! let manhattan = roadmap.manhattan_adjacency();
//! assert_eq!(manhattan[(0, 1)], 10);
//! ```
//!
//! ## Crate Features
//! - `parallel` (default): evaluate rows and edge candidates with `rayon`.
//! - `log`: trace the time spent in every stage of the construction.
#![warn(missing_docs)]

// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    // does nothing without log feature
    ($msg: literal, $timer: ident) => {};
}

mod config;
pub use config::{AxisBlockRule, NeighborSymmetry, RoadmapConfig};

mod obstacle;
pub use obstacle::{obstacles_from_corners, Obstacle, ObstacleError};

mod sample_filter;
pub use sample_filter::filter_samples;

pub mod graph;
pub use graph::{AdjacencyMatrix, NeighborGraphBuilder, NeighborSets};

pub mod collision;
pub use collision::{EdgeCollisionFilter, FilterSummary};

mod roadmap;
pub use roadmap::Roadmap;

/// A shorthand for Points on the map.
///
/// Coordinates grow to the right (`x`) and downwards (`y`), so the top-left corner
/// of a rectangle has the smaller coordinates.
pub type Point = (isize, isize);

/// The index of a Node in a [`Roadmap`].
///
/// Indices are assigned after filtering and run from `0` to `node_count() - 1`.
pub type NodeID = usize;

/// A set of Points, using the faster hasher of hashbrown
pub type PointSet = hashbrown::HashSet<Point>;

/// A set of [`NodeID`]s
pub type NodeIDSet = hashbrown::HashSet<NodeID>;

/// The Euclidean distance between two Points
pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    let dx = a.0 as f64 - b.0 as f64;
    let dy = a.1 as f64 - b.1 as f64;
    (dx * dx + dy * dy).sqrt()
}

/// The Manhattan (L1) distance between two Points, saturating at `usize::MAX`
pub fn manhattan_distance(a: Point, b: Point) -> usize {
    a.0.abs_diff(b.0).saturating_add(a.1.abs_diff(b.1))
}

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        collision::{EdgeCollisionFilter, FilterSummary},
        graph::{AdjacencyMatrix, NeighborGraphBuilder, NeighborSets},
        AxisBlockRule, NeighborSymmetry, NodeID, Obstacle, ObstacleError, Point, Roadmap,
        RoadmapConfig,
    };
}
