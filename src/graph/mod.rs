//! The dense graph representation and the k-nearest neighbor stage.

mod matrix;
pub use matrix::AdjacencyMatrix;

mod neighbors;
pub use neighbors::{NeighborGraphBuilder, NeighborSets};
