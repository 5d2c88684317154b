use crate::{
    collision::EdgeCollisionFilter,
    filter_samples,
    graph::{AdjacencyMatrix, NeighborGraphBuilder, NeighborSets},
    manhattan_distance, NodeID, Obstacle, Point, RoadmapConfig,
};

/// A Probabilistic Roadmap over the free space of a map.
///
/// All work happens in [`Roadmap::new`]. Afterwards the roadmap can only be read. To change
/// the samples, the obstacles or the configuration, build a new one.
///
/// ## Examples
/// ```
/// use prm_roadmap::prelude::*;
///
/// let samples = vec![(0, 0), (10, 0), (0, 10), (10, 10)];
/// let roadmap = Roadmap::new(samples, &[], RoadmapConfig::with_k(3));
///
/// let mut neighbors = Vec::new();
/// roadmap.get_all_neighbors(0, &mut neighbors);
/// assert_eq!(neighbors, vec![1, 2, 3]);
/// assert_eq!(roadmap.edge_count(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct Roadmap {
    nodes: Vec<Point>,
    obstacles: Vec<Obstacle>,
    neighbors: NeighborSets,
    adjacency: AdjacencyMatrix<u8>,
    config: RoadmapConfig,
}

impl Roadmap {
    /// Builds the roadmap.
    ///
    /// `samples` that lie inside any obstacle are dropped, and the rest are numbered in
    /// their original order. Then every Node is connected to its `config.k` nearest Nodes,
    /// and finally all edges that cross an obstacle are removed.
    ///
    /// This never fails: duplicate samples are never connected to each other, and if no
    /// sample survives, the roadmap is simply empty.
    pub fn new(samples: Vec<Point>, obstacles: &[Obstacle], config: RoadmapConfig) -> Roadmap {
        #[cfg(feature = "log")]
        let (outer_timer, timer) = (std::time::Instant::now(), std::time::Instant::now());

        #[cfg(feature = "log")]
        let sample_count = samples.len();

        let nodes = filter_samples(samples, obstacles);
        re_trace!("filter samples", timer);

        #[cfg(feature = "log")]
        log::debug!(
            "kept {} of {} samples outside of {} obstacles",
            nodes.len(),
            sample_count,
            obstacles.len()
        );

        let (neighbors, mut adjacency) =
            NeighborGraphBuilder::new(config.k, config.neighbor_symmetry).build(&nodes);
        re_trace!("build neighbor graph", timer);

        #[allow(unused)]
        let summary = EdgeCollisionFilter::new(config.axis_block_rule).apply(
            &nodes,
            obstacles,
            &mut adjacency,
        );
        re_trace!("filter edge collisions", timer);

        #[cfg(feature = "log")]
        log::debug!(
            "removed {} of {} candidate edges crossing obstacles",
            summary.removed,
            summary.candidates
        );

        re_trace!("build roadmap", outer_timer);

        Roadmap {
            nodes,
            obstacles: obstacles.to_vec(),
            neighbors,
            adjacency,
            config,
        }
    }

    /// The final `0/1` connectivity matrix with one row per Node.
    ///
    /// With [`NeighborSymmetry::Directed`](crate::NeighborSymmetry::Directed), an edge chosen
    /// only by the Node with the higher [`NodeID`] can remain set in the lower triangle alone.
    pub fn adjacency(&self) -> &AdjacencyMatrix<u8> {
        &self.adjacency
    }

    /// The Manhattan distance for every set entry of [`adjacency`](Self::adjacency), `0` for
    /// all others.
    ///
    /// Distances that don't fit into a `usize` saturate at `usize::MAX`.
    pub fn manhattan_adjacency(&self) -> AdjacencyMatrix<usize> {
        AdjacencyMatrix::from_fn(self.nodes.len(), |i, j| {
            if self.adjacency[(i, j)] == 1 {
                manhattan_distance(self.nodes[i], self.nodes[j])
            } else {
                0
            }
        })
    }

    /// The positions of the Nodes, indexed by [`NodeID`]
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// The number of Nodes that survived filtering
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The obstacles the roadmap was built around
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// The nearest Nodes every Node chose, before collision filtering
    pub fn neighbor_sets(&self) -> &NeighborSets {
        &self.neighbors
    }

    /// The configuration used to build the roadmap
    pub fn config(&self) -> &RoadmapConfig {
        &self.config
    }

    /// The neighbor count
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// The map dimension passed in through the config
    pub fn dim(&self) -> usize {
        self.config.dim
    }

    /// Writes all Nodes that `id` has an edge to into `target`, in order of [`NodeID`].
    ///
    /// `target` is cleared first.
    #[track_caller]
    pub fn get_all_neighbors(&self, id: NodeID, target: &mut Vec<NodeID>) {
        target.clear();
        target.extend(
            self.adjacency
                .row(id)
                .iter()
                .enumerate()
                .filter(|&(_, &cell)| cell == 1)
                .map(|(other, _)| other),
        );
    }

    /// Iterates over all edges `(i, j)` with `i < j` that are set in the upper triangle.
    pub fn edges(&self) -> impl Iterator<Item = (NodeID, NodeID)> + '_ {
        let n = self.nodes.len();
        (0..n)
            .flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
            .filter(move |&(i, j)| self.adjacency[(i, j)] == 1)
    }

    /// The number of edges in [`edges`](Self::edges)
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
