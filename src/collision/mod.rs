//! Removal of roadmap edges that cross obstacles.

pub mod axis;
pub mod sloped;

use crate::{graph::AdjacencyMatrix, AxisBlockRule, NodeID, Obstacle, Point};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The outcome of [`EdgeCollisionFilter::apply`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// the upper-triangle edges that were checked
    pub candidates: usize,
    /// the edges that crossed an obstacle and were removed
    pub removed: usize,
}

/// Removes every edge whose straight line between its Nodes crosses an obstacle.
///
/// Horizontal and vertical edges are checked according to the configured [`AxisBlockRule`],
/// all others with the two stage check in [`sloped`].
#[derive(Clone, Copy, Debug)]
pub struct EdgeCollisionFilter {
    axis_rule: AxisBlockRule,
}

impl EdgeCollisionFilter {
    /// Creates a new filter
    pub fn new(axis_rule: AxisBlockRule) -> EdgeCollisionFilter {
        EdgeCollisionFilter { axis_rule }
    }

    /// Checks if the edge from `a` to `b` is blocked by any of the obstacles.
    ///
    /// Obstacles are checked in order, and the first one that blocks the edge ends the check.
    pub fn edge_blocked(&self, a: Point, b: Point, obstacles: &[Obstacle]) -> bool {
        if a.1 == b.1 {
            obstacles
                .iter()
                .any(|obstacle| axis::horizontal_blocked(a, b, obstacle, self.axis_rule))
        } else if a.0 == b.0 {
            obstacles
                .iter()
                .any(|obstacle| axis::vertical_blocked(a, b, obstacle, self.axis_rule))
        } else if let Some(line) = sloped::Line::through(a, b) {
            let bounds = sloped::edge_bounds(a, b);
            obstacles.iter().any(|obstacle| {
                sloped::gate(bounds, obstacle) && sloped::line_hits_obstacle(&line, obstacle)
            })
        } else {
            false
        }
    }

    /// Clears `adj[(i, j)]` and `adj[(j, i)]` for every blocked edge and returns how many
    /// edges were checked and removed.
    ///
    /// Only the upper triangle (`i < j`) is read to find edges. An entry that is only set in
    /// the lower triangle is left untouched.
    pub fn apply(
        &self,
        nodes: &[Point],
        obstacles: &[Obstacle],
        adj: &mut AdjacencyMatrix<u8>,
    ) -> FilterSummary {
        let candidates: Vec<(NodeID, NodeID)> = (0..adj.len())
            .flat_map(|i| (i + 1..adj.len()).map(move |j| (i, j)))
            .filter(|&(i, j)| adj[(i, j)] != 0)
            .collect();
        let candidate_count = candidates.len();

        // every decision only depends on the upper triangle, which is not written below,
        // so all candidates can be checked before removing any of them
        #[cfg(feature = "parallel")]
        let blocked: Vec<(NodeID, NodeID)> = candidates
            .into_par_iter()
            .filter(|&(i, j)| self.edge_blocked(nodes[i], nodes[j], obstacles))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let blocked: Vec<(NodeID, NodeID)> = candidates
            .into_iter()
            .filter(|&(i, j)| self.edge_blocked(nodes[i], nodes[j], obstacles))
            .collect();

        for &(i, j) in blocked.iter() {
            adj[(i, j)] = 0;
            adj[(j, i)] = 0;
        }

        FilterSummary {
            candidates: candidate_count,
            removed: blocked.len(),
        }
    }
}
