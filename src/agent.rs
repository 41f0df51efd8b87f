//! The moving agent: a position paired with a [PathCursor].
//!
//! Whatever loop drives the simulation owns an [Agent] value and calls
//! [Agent::advance] at its own cadence; the agent consumes one waypoint per
//! step and snaps onto it. Reaching a waypoint re-arms the cursor, so the
//! route can never be consumed faster than the position follows it.

use crate::cursor::PathCursor;
use grid_util::point::Point;
use log::debug;

/// Linear interpolation between two cells, rounded back onto the grid. The
/// agent drives it with `t = 1.0`, taking the full step at once.
pub fn lerp(from: Point, to: Point, t: f32) -> Point {
    let x = from.x as f32 + (to.x - from.x) as f32 * t;
    let y = from.y as f32 + (to.y - from.y) as f32 * t;
    Point::new(x.round() as i32, y.round() as i32)
}

#[derive(Clone, Debug)]
pub struct Agent {
    position: Point,
    cursor: PathCursor,
    reached_waypoint: bool,
}

impl Agent {
    pub fn new(position: Point) -> Agent {
        Agent {
            position,
            cursor: PathCursor::new(),
            reached_waypoint: true,
        }
    }

    /// Copies a solved path (goal-first, as [crate::PathFinder::find_path]
    /// returns it) into the agent's cursor, replacing any route it was on.
    /// The agent is expected to stand on the path's start cell.
    pub fn follow_path(&mut self, path: Vec<Point>) {
        self.cursor = PathCursor::follow(path);
        self.reached_waypoint = true;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn has_arrived(&self) -> bool {
        self.cursor.has_arrived()
    }

    /// Takes one step along the route: consumes the next waypoint and moves
    /// onto it. Returns false, without moving, once the route is drained or
    /// while the previous waypoint has not been reached yet.
    pub fn advance(&mut self) -> bool {
        if !self.reached_waypoint || self.cursor.has_arrived() {
            return false;
        }
        let next = self.cursor.next();
        self.reached_waypoint = false;
        self.position = lerp(self.position, next, 1.0);
        if self.position == next {
            self.reached_waypoint = true;
        }
        debug!("Agent stepped to {}", self.position);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_a_route_to_its_goal() {
        let mut agent = Agent::new(Point::new(0, 0));
        agent.follow_path(vec![
            Point::new(2, 0),
            Point::new(1, 0),
            Point::new(0, 0),
        ]);
        assert!(!agent.has_arrived());

        assert!(agent.advance());
        assert_eq!(agent.position(), Point::new(1, 0));
        assert!(agent.advance());
        assert_eq!(agent.position(), Point::new(2, 0));

        assert!(agent.has_arrived());
        assert!(!agent.advance());
        assert_eq!(agent.position(), Point::new(2, 0));
    }

    #[test]
    fn empty_route_means_already_arrived() {
        let mut agent = Agent::new(Point::new(3, 3));
        agent.follow_path(Vec::new());
        assert!(agent.has_arrived());
        assert!(!agent.advance());
        assert_eq!(agent.position(), Point::new(3, 3));
    }

    #[test]
    fn full_interpolation_snaps_onto_the_target() {
        assert_eq!(lerp(Point::new(0, 0), Point::new(4, 2), 1.0), Point::new(4, 2));
        assert_eq!(lerp(Point::new(2, 2), Point::new(2, 2), 1.0), Point::new(2, 2));
        assert_eq!(lerp(Point::new(0, 0), Point::new(4, 2), 0.5), Point::new(2, 1));
    }
}
