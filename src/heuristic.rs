//! Remaining-cost estimates between two grid cells.
//!
//! All estimates are fixed-point: distances are scaled by 10 so that the
//! cardinal/diagonal step-cost ratio of the search (10 : 14) stays in
//! integers. Estimating with [Heuristic::Manhattan] under orthogonal movement
//! or [Heuristic::Octagonal] under diagonal movement never overestimates the
//! true remaining cost, so the search result is cost-optimal.

use grid_util::point::Point;

/// A caller-supplied estimate; must be pure and non-negative.
pub type HeuristicFn = fn(Point, Point) -> i32;

/// Estimate of the remaining cost between two cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// `10 * (|dx| + |dy|)`. Admissible for orthogonal movement.
    Manhattan,
    /// `round(10 * sqrt(dx² + dy²))`. Straight-line distance.
    Euclidean,
    /// `10 * (|dx| + |dy|) - 6 * min(|dx|, |dy|)`. Admissible for diagonal
    /// movement with 10/14 step costs.
    Octagonal,
    /// Escape hatch for a caller-supplied estimate function.
    Custom(HeuristicFn),
}

impl Default for Heuristic {
    fn default() -> Heuristic {
        Heuristic::Manhattan
    }
}

impl Heuristic {
    /// Estimated cost of moving from `from` to `to`.
    pub fn estimate(&self, from: Point, to: Point) -> i32 {
        match self {
            Heuristic::Manhattan => manhattan(from, to),
            Heuristic::Euclidean => euclidean(from, to),
            Heuristic::Octagonal => octagonal(from, to),
            Heuristic::Custom(f) => f(from, to),
        }
    }
}

fn delta(a: Point, b: Point) -> (i32, i32) {
    ((a.x - b.x).abs(), (a.y - b.y).abs())
}

pub fn manhattan(a: Point, b: Point) -> i32 {
    let (dx, dy) = delta(a, b);
    10 * (dx + dy)
}

pub fn euclidean(a: Point, b: Point) -> i32 {
    let (dx, dy) = delta(a, b);
    (10.0 * f64::from(dx * dx + dy * dy).sqrt()).round() as i32
}

pub fn octagonal(a: Point, b: Point) -> i32 {
    let (dx, dy) = delta(a, b);
    10 * (dx + dy) - 6 * dx.min(dy)
}
