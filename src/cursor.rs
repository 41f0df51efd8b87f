//! Step-wise consumption of a solved path.
//!
//! A solved path arrives ordered goal-first, start-last. [PathCursor] treats
//! that sequence as a stack whose top is the cell the agent currently
//! occupies: each [PathCursor::next] pops the current cell and exposes the
//! following waypoint, so the route drains start-to-goal even though it is
//! stored goal-to-start.

use grid_util::point::Point;

/// Holds a private copy of a solved path and hands it out one waypoint at a
/// time.
#[derive(Clone, Debug, Default)]
pub struct PathCursor {
    waypoints: Vec<Point>,
}

impl PathCursor {
    pub fn new() -> PathCursor {
        PathCursor::default()
    }

    /// Starts consuming `path`, which must be ordered goal-first as produced
    /// by [crate::PathFinder::find_path]. Any waypoints left from an earlier
    /// path are dropped.
    pub fn follow(path: Vec<Point>) -> PathCursor {
        PathCursor { waypoints: path }
    }

    /// Pops the currently occupied waypoint and returns the next one on the
    /// route. Once one waypoint (the goal) or nothing remains, the cursor has
    /// arrived: the sequence is left untouched and the grid origin comes back
    /// as a sentinel.
    pub fn next(&mut self) -> Point {
        if self.waypoints.len() <= 1 {
            return Point::new(0, 0);
        }
        self.waypoints.pop();
        // Non-empty after the pop since at least two elements remained.
        *self.waypoints.last().unwrap()
    }

    /// True once the held sequence has drained to the goal alone (or was
    /// empty from the start).
    pub fn has_arrived(&self) -> bool {
        self.waypoints.len() <= 1
    }

    pub fn remaining(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
