/// Options for configuring the construction of a [`Roadmap`](crate::Roadmap)
///
/// The default values reproduce the reference behavior of the algorithm, including its
/// quirks. Use [`RoadmapConfig::SYMMETRIC`] for an undirected k-nearest graph with the
/// intuitive collision check for axis-aligned edges.
///
/// ## Examples
/// ```
/// use prm_roadmap::prelude::*;
///
/// let config = RoadmapConfig {
///     k: 8,
///     ..RoadmapConfig::SYMMETRIC
/// };
/// assert_eq!(config.neighbor_symmetry, NeighborSymmetry::Union);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoadmapConfig {
    /// The number of nearest neighbors every Node keeps before collision filtering.
    ///
    /// A value larger than the number of other Nodes keeps all of them.
    ///
    /// Default: `5`
    pub k: usize,
    /// The dimension of the map the samples were drawn from.
    ///
    /// Not used by the construction, only carried along for consumers of the roadmap.
    ///
    /// Default: `0`
    pub dim: usize,
    /// How the per-Node neighbor choices are turned into the connectivity matrix.
    ///
    /// Default: [`NeighborSymmetry::Directed`]
    pub neighbor_symmetry: NeighborSymmetry,
    /// When a horizontal or vertical edge counts as blocked by an obstacle.
    ///
    /// Default: [`AxisBlockRule::Literal`]
    pub axis_block_rule: AxisBlockRule,
}

impl RoadmapConfig {
    /// The reference behavior. Same as `RoadmapConfig::default()`
    pub const REFERENCE: RoadmapConfig = RoadmapConfig {
        k: 5,
        dim: 0,
        neighbor_symmetry: NeighborSymmetry::Directed,
        axis_block_rule: AxisBlockRule::Literal,
    };

    /// Symmetric neighborhoods and full-span checks for axis-aligned edges.
    pub const SYMMETRIC: RoadmapConfig = RoadmapConfig {
        k: 5,
        dim: 0,
        neighbor_symmetry: NeighborSymmetry::Union,
        axis_block_rule: AxisBlockRule::Span,
    };

    /// The reference behavior with a different neighbor count
    pub fn with_k(k: usize) -> RoadmapConfig {
        RoadmapConfig {
            k,
            ..Self::REFERENCE
        }
    }
}

impl Default for RoadmapConfig {
    fn default() -> RoadmapConfig {
        RoadmapConfig::REFERENCE
    }
}

/// Decides which entries of the connectivity matrix are set from the k-nearest choices.
///
/// Every Node `i` chooses its `k` nearest Nodes independently, so `j` may be among the
/// nearest of `i` while `i` is not among the nearest of `j`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NeighborSymmetry {
    /// `adj[i][j] == 1` iff `j` is among the `k` nearest of `i`.
    ///
    /// The matrix is not necessarily symmetric. The collision filter only reads the upper
    /// triangle, so an edge that only exists as `adj[j][i]` (with `i < j`) stays in the
    /// lower triangle untested.
    Directed,
    /// `adj[i][j] == adj[j][i] == 1` if either Node chose the other.
    Union,
    /// `adj[i][j] == adj[j][i] == 1` only if both Nodes chose each other.
    Intersection,
}

/// The rule for blocking an edge that is parallel to one of the axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisBlockRule {
    /// A horizontal edge from `a` is blocked iff the obstacle's vertical span contains
    /// `a.y` and `a.x <= left && right <= a.x`. Vertical edges likewise with the axes
    /// swapped.
    ///
    /// For any obstacle wider than a single column this never holds, so axis-aligned
    /// edges are practically never blocked.
    Literal,
    /// A horizontal edge is blocked iff the obstacle's vertical span contains its `y` and
    /// its `x` range overlaps the obstacle's horizontal span. Vertical edges likewise.
    Span,
}
