use crate::Point;

use std::fmt;

/// An axis-aligned rectangle that Nodes and edges of a roadmap must avoid.
///
/// Both corners are part of the rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Obstacle {
    top_left: Point,
    bottom_right: Point,
}

impl Obstacle {
    /// Creates an Obstacle from its two corners.
    ///
    /// ## Errors
    /// [`ObstacleError::InvertedCorners`] if `top_left` is right of or below `bottom_right`
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Obstacle, ObstacleError> {
        if top_left.0 > bottom_right.0 || top_left.1 > bottom_right.1 {
            return Err(ObstacleError::InvertedCorners {
                index: 0,
                top_left,
                bottom_right,
            });
        }
        Ok(Obstacle {
            top_left,
            bottom_right,
        })
    }

    /// The corner with the smallest coordinates
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// The corner with the largest coordinates
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    /// The horizontal extent `(left, right)`
    pub fn x_span(&self) -> (isize, isize) {
        (self.top_left.0, self.bottom_right.0)
    }

    /// The vertical extent `(top, bottom)`
    pub fn y_span(&self) -> (isize, isize) {
        (self.top_left.1, self.bottom_right.1)
    }

    /// Checks if `point` lies within the closed rectangle, boundary included.
    pub fn contains(&self, point: Point) -> bool {
        let (left, right) = self.x_span();
        let (top, bottom) = self.y_span();
        left <= point.0 && point.0 <= right && top <= point.1 && point.1 <= bottom
    }
}

/// Builds the obstacle list from positional corner sequences.
///
/// `top_left[i]` and `bottom_right[i]` describe obstacle `i`. Both sequences have to contain
/// exactly `n_obstacles` corners.
///
/// ## Examples
/// ```
/// use prm_roadmap::{obstacles_from_corners, ObstacleError};
///
/// let obstacles = obstacles_from_corners(&[(0, 0), (5, 5)], &[(2, 2), (6, 8)], 2).unwrap();
/// assert_eq!(obstacles.len(), 2);
///
/// let err = obstacles_from_corners(&[(0, 0)], &[(2, 2), (6, 8)], 2).unwrap_err();
/// assert!(matches!(err, ObstacleError::LengthMismatch { .. }));
/// ```
pub fn obstacles_from_corners(
    top_left: &[Point],
    bottom_right: &[Point],
    n_obstacles: usize,
) -> Result<Vec<Obstacle>, ObstacleError> {
    if top_left.len() != n_obstacles || bottom_right.len() != n_obstacles {
        return Err(ObstacleError::LengthMismatch {
            n_obstacles,
            top_left: top_left.len(),
            bottom_right: bottom_right.len(),
        });
    }

    top_left
        .iter()
        .zip(bottom_right)
        .enumerate()
        .map(|(index, (&tl, &br))| {
            Obstacle::new(tl, br).map_err(|_| ObstacleError::InvertedCorners {
                index,
                top_left: tl,
                bottom_right: br,
            })
        })
        .collect()
}

/// The ways an obstacle description can be invalid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObstacleError {
    /// The corner sequences don't both have `n_obstacles` entries
    LengthMismatch {
        /// the announced number of obstacles
        n_obstacles: usize,
        /// the number of top-left corners
        top_left: usize,
        /// the number of bottom-right corners
        bottom_right: usize,
    },
    /// `top_left` is not above and left of `bottom_right`
    InvertedCorners {
        /// position of the obstacle in the corner sequences
        index: usize,
        /// the offending top-left corner
        top_left: Point,
        /// the offending bottom-right corner
        bottom_right: Point,
    },
}

impl fmt::Display for ObstacleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                n_obstacles,
                top_left,
                bottom_right,
            } => write!(
                f,
                "expected {} obstacles, got {} top-left and {} bottom-right corners",
                n_obstacles, top_left, bottom_right
            ),
            Self::InvertedCorners {
                index,
                top_left,
                bottom_right,
            } => write!(
                f,
                "obstacle {}: top-left corner {:?} is not above and left of bottom-right corner {:?}",
                index, top_left, bottom_right
            ),
        }
    }
}

impl std::error::Error for ObstacleError {}
