use crate::{Obstacle, Point};

/// Removes all samples that lie inside (or on the boundary of) any obstacle.
///
/// The surviving samples keep their relative order. Their position in the returned Vec
/// becomes their [`NodeID`](crate::NodeID).
///
/// ## Examples
/// ```
/// use prm_roadmap::{filter_samples, Obstacle};
///
/// let obstacles = [Obstacle::new((4, 4), (6, 6)).unwrap()];
/// let nodes = filter_samples(vec![(5, 5), (0, 0), (6, 4), (7, 7)], &obstacles);
///
/// assert_eq!(nodes, vec![(0, 0), (7, 7)]);
/// ```
pub fn filter_samples(mut samples: Vec<Point>, obstacles: &[Obstacle]) -> Vec<Point> {
    samples.retain(|&sample| !obstacles.iter().any(|obstacle| obstacle.contains(sample)));
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_obstacles() {
        let samples = vec![(0, 0), (3, 1), (3, 1)];
        assert_eq!(filter_samples(samples.clone(), &[]), samples);
    }

    #[test]
    fn everything_removed() {
        let obstacles = [Obstacle::new((0, 0), (10, 10)).unwrap()];
        let nodes = filter_samples(vec![(0, 0), (10, 10), (5, 2)], &obstacles);
        assert!(nodes.is_empty());
    }

    #[test]
    fn overlapping_obstacles() {
        let obstacles = [
            Obstacle::new((0, 0), (4, 4)).unwrap(),
            Obstacle::new((2, 2), (8, 3)).unwrap(),
        ];
        let nodes = filter_samples(vec![(3, 3), (8, 2), (8, 4), (-1, 0)], &obstacles);
        assert_eq!(nodes, vec![(8, 4), (-1, 0)]);
    }
}
