//! Collision checks for edges that are neither horizontal nor vertical.
//!
//! The check evaluates the infinite line through the edge at the boundaries of the obstacle.
//! Since that line extends beyond the edge, obstacles are first [`gate`]d by the bounding box
//! of the edge. This is an approximation of a real segment/rectangle intersection: an obstacle
//! that shares a coordinate range with the edge but lies beside it can still block the edge.

use crate::{Obstacle, Point};

/// The line through two Points, in the forms `y = m_y * x + c_y` and `x = m_x * y + c_x`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    m_y: f64,
    c_y: f64,
    m_x: f64,
    c_x: f64,
}

impl Line {
    /// The line through `a` and `b`, or `None` if it is parallel to one of the axes
    pub fn through(a: Point, b: Point) -> Option<Line> {
        if a.0 == b.0 || a.1 == b.1 {
            return None;
        }
        let dx = b.0 as f64 - a.0 as f64;
        let dy = b.1 as f64 - a.1 as f64;

        let m_y = dy / dx;
        let m_x = dx / dy;
        Some(Line {
            m_y,
            c_y: b.1 as f64 - b.0 as f64 * m_y,
            m_x,
            c_x: b.0 as f64 - b.1 as f64 * m_x,
        })
    }

    /// `y` at the given `x`
    pub fn y_at(&self, x: f64) -> f64 {
        self.m_y * x + self.c_y
    }

    /// `x` at the given `y`
    pub fn x_at(&self, y: f64) -> f64 {
        self.m_x * y + self.c_x
    }
}

/// The bounding box of an edge, as `(top_left, bottom_right)`
pub fn edge_bounds(a: Point, b: Point) -> (Point, Point) {
    (
        (a.0.min(b.0), a.1.min(b.1)),
        (a.0.max(b.0), a.1.max(b.1)),
    )
}

/// Checks if any boundary coordinate of the obstacle lies within the edge's bounding box on
/// the matching axis.
pub fn gate((top_left, bottom_right): (Point, Point), obstacle: &Obstacle) -> bool {
    let (left, right) = obstacle.x_span();
    let (top, bottom) = obstacle.y_span();
    let in_y = |y: isize| top_left.1 <= y && y <= bottom_right.1;
    let in_x = |x: isize| top_left.0 <= x && x <= bottom_right.0;

    in_y(top) || in_y(bottom) || in_x(left) || in_x(right)
}

/// Checks if the line crosses the obstacle at one of its four boundaries.
pub fn line_hits_obstacle(line: &Line, obstacle: &Obstacle) -> bool {
    let (left, right) = obstacle.x_span();
    let (top, bottom) = obstacle.y_span();
    let (left, right, top, bottom) = (left as f64, right as f64, top as f64, bottom as f64);

    let within_y = |y: f64| top <= y && y <= bottom;
    let within_x = |x: f64| left <= x && x <= right;

    within_y(line.y_at(left))
        || within_y(line.y_at(right))
        || within_x(line.x_at(top))
        || within_x(line.x_at(bottom))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_forms() {
        let line = Line::through((0, 1), (4, 3)).unwrap();
        assert_eq!(line.y_at(2.0), 2.0);
        assert_eq!(line.x_at(3.0), 4.0);
        assert_eq!(Line::through((4, 3), (0, 1)), Some(line));

        assert!(Line::through((1, 0), (1, 5)).is_none());
        assert!(Line::through((0, 5), (1, 5)).is_none());
    }

    #[test]
    fn line_between_distant_points() {
        let line = Line::through((isize::MIN / 2 - 10, 0), (isize::MAX / 2 + 10, 5)).unwrap();
        let y = line.y_at(0.0);
        assert!(y.is_finite());
        assert!((y - 2.5).abs() < 0.01);
    }

    #[test]
    fn bounds() {
        assert_eq!(edge_bounds((5, -1), (2, 4)), ((2, -1), (5, 4)));
    }

    #[test]
    fn diagonal_through_obstacle() {
        let obstacle = Obstacle::new((4, 4), (6, 6)).unwrap();
        let (a, b) = ((0, 0), (10, 10));

        assert!(gate(edge_bounds(a, b), &obstacle));
        assert!(line_hits_obstacle(&Line::through(a, b).unwrap(), &obstacle));
    }

    #[test]
    fn line_misses_obstacle() {
        let obstacle = Obstacle::new((4, 4), (6, 6)).unwrap();
        let line = Line::through((0, 10), (10, 9)).unwrap();
        assert!(!line_hits_obstacle(&line, &obstacle));
    }

    #[test]
    fn gate_rejects_far_obstacles() {
        // the line y = x runs through the obstacle, but far beyond the edge
        let obstacle = Obstacle::new((10, 10), (12, 12)).unwrap();
        let (a, b) = ((0, 0), (1, 1));

        assert!(line_hits_obstacle(&Line::through(a, b).unwrap(), &obstacle));
        assert!(!gate(edge_bounds(a, b), &obstacle));
    }

    #[test]
    fn gate_lets_through_obstacles_beside_the_edge() {
        // shares the vertical range of the edge, while the edge ends 8 columns before it
        let obstacle = Obstacle::new((10, 0), (12, 20)).unwrap();
        let (a, b) = ((0, 0), (2, 1));

        assert!(gate(edge_bounds(a, b), &obstacle));
        // y = x / 2 reaches the obstacle at y = 5
        assert!(line_hits_obstacle(&Line::through(a, b).unwrap(), &obstacle));
    }
}
