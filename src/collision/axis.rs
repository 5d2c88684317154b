//! Collision checks for horizontal and vertical edges.

use crate::{AxisBlockRule, Obstacle, Point};

/// Checks a horizontal edge (`a.1 == b.1`) against a single obstacle.
pub fn horizontal_blocked(a: Point, b: Point, obstacle: &Obstacle, rule: AxisBlockRule) -> bool {
    axis_blocked((a.0, a.1), (b.0, b.1), obstacle.x_span(), obstacle.y_span(), rule)
}

/// Checks a vertical edge (`a.0 == b.0`) against a single obstacle.
pub fn vertical_blocked(a: Point, b: Point, obstacle: &Obstacle, rule: AxisBlockRule) -> bool {
    axis_blocked((a.1, a.0), (b.1, b.0), obstacle.y_span(), obstacle.x_span(), rule)
}

/// `along` is the coordinate that varies over the edge, `across` the constant one.
/// Points are given as `(along, across)`.
fn axis_blocked(
    a: (isize, isize),
    b: (isize, isize),
    (low, high): (isize, isize),
    (across_low, across_high): (isize, isize),
    rule: AxisBlockRule,
) -> bool {
    if !(across_low <= a.1 && a.1 <= across_high) {
        return false;
    }
    match rule {
        AxisBlockRule::Literal => a.0 <= low && high <= a.0,
        AxisBlockRule::Span => a.0.min(b.0) <= high && low <= a.0.max(b.0),
    }
}
