use super::AdjacencyMatrix;
use crate::{euclidean_distance, NeighborSymmetry, NodeID, NodeIDSet, Point};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use std::cmp::Ordering;

/// The `k` nearest Nodes chosen by every Node.
///
/// This relation is directed: `j` being among the nearest of `i` says nothing about `i`
/// being among the nearest of `j`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborSets {
    sets: Vec<NodeIDSet>,
}

impl NeighborSets {
    /// The number of Nodes
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// `true` if there are no Nodes
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// The Nodes chosen by `id`
    #[track_caller]
    pub fn get(&self, id: NodeID) -> &NodeIDSet {
        &self.sets[id]
    }

    /// Checks if `to` is among the nearest Nodes of `from`
    pub fn contains(&self, from: NodeID, to: NodeID) -> bool {
        self.sets.get(from).map_or(false, |set| set.contains(&to))
    }

    /// Iterates over the chosen Nodes of every Node, in order of [`NodeID`]
    pub fn iter(&self) -> impl Iterator<Item = &NodeIDSet> + '_ {
        self.sets.iter()
    }
}

/// Connects every Node to its `k` nearest Nodes.
///
/// Construction runs in three steps:
/// 1. [`distance_matrix`](Self::distance_matrix): Euclidean distance between all pairs
/// 2. [`select_neighbors`](Self::select_neighbors): every row keeps its `k` smallest
///    nonzero entries
/// 3. [`connectivity`](Self::connectivity): the choices become a `0/1` matrix according to
///    the configured [`NeighborSymmetry`]
#[derive(Clone, Copy, Debug)]
pub struct NeighborGraphBuilder {
    k: usize,
    symmetry: NeighborSymmetry,
}

impl NeighborGraphBuilder {
    /// Creates a new builder
    pub fn new(k: usize, symmetry: NeighborSymmetry) -> NeighborGraphBuilder {
        NeighborGraphBuilder { k, symmetry }
    }

    /// Runs all three steps and returns the chosen neighbors with the resulting connectivity.
    pub fn build(&self, nodes: &[Point]) -> (NeighborSets, AdjacencyMatrix<u8>) {
        #[cfg(feature = "log")]
        let timer = std::time::Instant::now();

        let distances = Self::distance_matrix(nodes);
        re_trace!("compute distances", timer);

        let neighbors = self.select_neighbors(&distances);
        re_trace!("select nearest neighbors", timer);

        let connectivity = self.connectivity(&neighbors);
        re_trace!("binarize neighbors", timer);

        (neighbors, connectivity)
    }

    /// Computes the symmetric matrix of Euclidean distances with a zero diagonal.
    pub fn distance_matrix(nodes: &[Point]) -> AdjacencyMatrix<f64> {
        let mut distances = AdjacencyMatrix::new(nodes.len());

        // every row is filled independently. d(a, b) and d(b, a) are bit-identical,
        // since the differences only change their sign before being squared
        #[cfg(feature = "parallel")]
        distances
            .par_rows_mut()
            .enumerate()
            .for_each(|(i, row)| fill_distance_row(nodes, i, row));

        #[cfg(not(feature = "parallel"))]
        distances
            .rows_mut()
            .enumerate()
            .for_each(|(i, row)| fill_distance_row(nodes, i, row));

        distances
    }

    /// Picks the `k` nearest Nodes of every row of `distances`.
    ///
    /// Zero entries are not candidates. This excludes the diagonal, but also any Node at
    /// the same position as the row's Node.
    pub fn select_neighbors(&self, distances: &AdjacencyMatrix<f64>) -> NeighborSets {
        #[cfg(feature = "parallel")]
        let sets = (0..distances.len())
            .into_par_iter()
            .map(|i| nearest_in_row(distances.row(i), self.k))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let sets = distances
            .rows()
            .map(|row| nearest_in_row(row, self.k))
            .collect();

        NeighborSets { sets }
    }

    /// Turns the chosen neighbors into a `0/1` matrix.
    pub fn connectivity(&self, neighbors: &NeighborSets) -> AdjacencyMatrix<u8> {
        let mut adj = AdjacencyMatrix::new(neighbors.len());

        for (i, set) in neighbors.iter().enumerate() {
            for &j in set.iter() {
                match self.symmetry {
                    NeighborSymmetry::Directed => adj[(i, j)] = 1,
                    NeighborSymmetry::Union => {
                        adj[(i, j)] = 1;
                        adj[(j, i)] = 1;
                    }
                    NeighborSymmetry::Intersection => {
                        if neighbors.contains(j, i) {
                            adj[(i, j)] = 1;
                        }
                    }
                }
            }
        }

        #[cfg(feature = "log")]
        if self.symmetry == NeighborSymmetry::Directed {
            let one_sided = neighbors
                .iter()
                .enumerate()
                .flat_map(|(i, set)| set.iter().map(move |&j| (i, j)))
                .filter(|&(i, j)| !neighbors.contains(j, i))
                .count();
            log::debug!("{} one-sided neighbor choices", one_sided);
        }

        adj
    }
}

fn fill_distance_row(nodes: &[Point], i: usize, row: &mut [f64]) {
    for (j, cell) in row.iter_mut().enumerate() {
        if i != j {
            *cell = euclidean_distance(nodes[i], nodes[j]);
        }
    }
}

/// The order in which a row's candidates are discarded: largest distance first, and the
/// lowest index among equal distances.
fn removal_order(a: &(NodeID, f64), b: &(NodeID, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then(a.0.cmp(&b.0))
}

/// Discarding the maximum of the row until only `k` nonzero entries remain keeps exactly
/// the candidates that come last in [`removal_order`], so a partial selection suffices.
fn nearest_in_row(row: &[f64], k: usize) -> NodeIDSet {
    let mut candidates: Vec<(NodeID, f64)> = row
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, distance)| distance != 0.0)
        .collect();

    let excess = candidates.len().saturating_sub(k);
    if excess > 0 {
        candidates.select_nth_unstable_by(excess - 1, removal_order);
        candidates.drain(..excess);
    }

    candidates.into_iter().map(|(id, _)| id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Repeatedly zeroes the first maximum of the row, then binarizes it.
    fn prune_by_max_extraction(mut row: Vec<f64>, k: usize) -> Vec<u8> {
        while row.iter().filter(|&&d| d != 0.0).count() > k {
            let max = row.iter().copied().fold(0.0, f64::max);
            let first = row.iter().position(|&d| d == max).unwrap();
            row[first] = 0.0;
        }
        row.into_iter().map(|d| (d != 0.0) as u8).collect()
    }

    fn to_indicator(set: &NodeIDSet, len: usize) -> Vec<u8> {
        (0..len).map(|j| set.contains(&j) as u8).collect()
    }

    #[test]
    fn distances_are_symmetric() {
        let nodes = [(0, 0), (3, 4), (-5, 2), (7, -1)];
        let distances = NeighborGraphBuilder::distance_matrix(&nodes);

        assert!(distances.is_symmetric());
        assert_eq!(distances[(0, 1)], 5.0);
        for i in 0..nodes.len() {
            assert_eq!(distances[(i, i)], 0.0);
        }
    }

    #[test]
    fn square() {
        let nodes = [(0, 0), (10, 0), (0, 10), (10, 10)];
        let distances = NeighborGraphBuilder::distance_matrix(&nodes);
        assert_eq!(distances[(0, 1)], 10.0);
        assert_eq!(distances[(0, 3)], 200f64.sqrt());

        let builder = NeighborGraphBuilder::new(2, NeighborSymmetry::Directed);
        let (neighbors, adj) = builder.build(&nodes);

        // the diagonal is the farthest, so it goes first
        assert_eq!(to_indicator(neighbors.get(0), 4), vec![0, 1, 1, 0]);
        assert_eq!(adj.row(3), &[0, 1, 1, 0]);
        assert!(adj.is_symmetric());
    }

    #[test]
    fn ties_remove_lowest_index_first() {
        let row = [0.0, 4.0, 2.0, 4.0, 4.0, 1.0];

        // two of the three 4.0s have to go, and the last one survives
        let set = nearest_in_row(&row, 3);
        assert_eq!(to_indicator(&set, row.len()), vec![0, 0, 1, 0, 1, 1]);
        assert_eq!(
            to_indicator(&set, row.len()),
            prune_by_max_extraction(row.to_vec(), 3)
        );
    }

    #[test]
    fn matches_max_extraction() {
        let rows: [&[f64]; 5] = [
            &[0.0, 1.0, 1.0, 1.0, 1.0],
            &[3.0, 0.0, 2.0, 3.0, 2.0, 5.0, 5.0],
            &[0.0, 0.0, 0.0],
            &[7.5, 0.0, 0.0, 1.5, 7.5, 0.0, 2.5],
            &[9.0, 8.0, 7.0, 6.0, 0.0, 5.0, 4.0, 3.0, 2.0],
        ];
        for row in rows {
            for k in 0..row.len() + 1 {
                assert_eq!(
                    to_indicator(&nearest_in_row(row, k), row.len()),
                    prune_by_max_extraction(row.to_vec(), k),
                    "row {:?} with k = {}",
                    row,
                    k
                );
            }
        }
    }

    #[test]
    fn k_larger_than_node_count() {
        let nodes = [(0, 0), (1, 7), (4, 2)];
        let (neighbors, adj) = NeighborGraphBuilder::new(10, NeighborSymmetry::Directed).build(&nodes);

        for i in 0..3 {
            assert_eq!(neighbors.get(i).len(), 2);
            assert_eq!(adj.row(i).iter().filter(|&&c| c == 1).count(), 2);
        }
    }

    #[test]
    fn duplicate_points_are_not_neighbors() {
        let nodes = [(0, 0), (0, 0), (5, 0)];
        let (neighbors, adj) = NeighborGraphBuilder::new(2, NeighborSymmetry::Directed).build(&nodes);

        assert!(!neighbors.contains(0, 1));
        assert!(!neighbors.contains(1, 0));
        assert_eq!(adj.row(0), &[0, 0, 1]);
        assert_eq!(adj.row(2), &[1, 1, 0]);
    }

    // (4,0) picks (0,0), which prefers (-1,0)
    const ONE_SIDED: [Point; 4] = [(0, 0), (-1, 0), (4, 0), (11, 0)];

    #[test]
    fn directed_choices_can_be_one_sided() {
        let builder = NeighborGraphBuilder::new(1, NeighborSymmetry::Directed);
        let (neighbors, adj) = builder.build(&ONE_SIDED);

        assert!(neighbors.contains(2, 0));
        assert!(!neighbors.contains(0, 2));
        assert_eq!(adj[(2, 0)], 1);
        assert_eq!(adj[(0, 2)], 0);
        assert!(!adj.is_symmetric());
    }

    #[test]
    fn union_and_intersection() {
        let distances = NeighborGraphBuilder::distance_matrix(&ONE_SIDED);

        let union = NeighborGraphBuilder::new(1, NeighborSymmetry::Union);
        let adj = union.connectivity(&union.select_neighbors(&distances));
        assert!(adj.is_symmetric());
        assert_eq!(adj[(0, 2)], 1);
        assert_eq!(adj[(2, 0)], 1);

        let intersection = NeighborGraphBuilder::new(1, NeighborSymmetry::Intersection);
        let adj = intersection.connectivity(&intersection.select_neighbors(&distances));
        assert!(adj.is_symmetric());
        assert_eq!(adj[(0, 2)], 0);
        assert_eq!(adj[(0, 1)], 1);
        assert_eq!(adj[(1, 0)], 1);
    }

    #[test]
    fn empty() {
        let (neighbors, adj) = NeighborGraphBuilder::new(3, NeighborSymmetry::Union).build(&[]);
        assert!(neighbors.is_empty());
        assert!(adj.is_empty());
    }
}
