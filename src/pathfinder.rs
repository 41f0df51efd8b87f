//! A* orchestration against a [GridModel] and a [Heuristic].
//!
//! [PathFinder::find_path] owns the open and closed working sets for the
//! duration of one call and hands back a waypoint sequence ordered
//! goal-first, start-last, which is the order [crate::PathCursor] consumes.
//! "No path" and "invalid request" both come back as an empty sequence;
//! callers that need to tell them apart validate with
//! [PathRequest::is_valid] up front.

use crate::astar::astar_search;
use crate::grid::GridModel;
use crate::heuristic::Heuristic;
use grid_util::point::Point;
use log::info;

/// Cost of a step to a cardinally adjacent cell.
pub const CARDINAL_COST: i32 = 10;
/// Cost of a step to a diagonally adjacent cell; 14/10 approximates sqrt(2).
pub const DIAGONAL_COST: i32 = 14;

const CARDINAL_STEPS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const DIAGONAL_STEPS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Movement model: which neighbours of a cell an agent can step to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// The four cardinally adjacent cells.
    Orthogonal,
    /// All eight adjacent cells. Diagonal steps are not blocked by their
    /// adjacent cardinal cells being occupied.
    Diagonal,
}

impl Default for Movement {
    fn default() -> Movement {
        Movement::Orthogonal
    }
}

/// A start/end pair for one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathRequest {
    pub start: Point,
    pub end: Point,
}

impl PathRequest {
    pub fn new(start: Point, end: Point) -> PathRequest {
        PathRequest { start, end }
    }

    /// Valid iff both endpoints lie within the bounds of `grid`. Validity is
    /// relative to the grid a request is submitted against.
    pub fn is_valid(&self, grid: &GridModel) -> bool {
        grid.in_bounds(self.start) && grid.in_bounds(self.end)
    }
}

/// Configured search: movement model, heuristic and an optional expansion
/// bound. The default matches the engine's historical configuration:
/// orthogonal movement with the Manhattan heuristic and no bound.
#[derive(Clone, Copy, Debug)]
pub struct PathFinder {
    pub movement: Movement,
    pub heuristic: Heuristic,
    expansion_limit: Option<usize>,
}

impl Default for PathFinder {
    fn default() -> PathFinder {
        PathFinder::new(Movement::default(), Heuristic::default())
    }
}

impl PathFinder {
    pub fn new(movement: Movement, heuristic: Heuristic) -> PathFinder {
        PathFinder {
            movement,
            heuristic,
            expansion_limit: None,
        }
    }

    /// Caps the number of node expansions per search. A search that hits the
    /// cap ends with an empty path, the same signal as "no route exists".
    pub fn with_expansion_limit(mut self, limit: usize) -> PathFinder {
        self.expansion_limit = Some(limit);
        self
    }

    /// Computes a waypoint sequence from `request.start` to `request.end`,
    /// ordered goal-first, start-last. Returns an empty sequence when the
    /// request is out of bounds or no route exists; neither case is an error.
    ///
    /// Ties on the total estimate are broken towards the node with the higher
    /// accumulated cost, so repeated calls on an unchanged grid return the
    /// same sequence.
    pub fn find_path(&self, grid: &GridModel, request: PathRequest) -> Vec<Point> {
        if !request.is_valid(grid) {
            info!(
                "Request {} -> {} lies outside the {}x{} grid",
                request.start,
                request.end,
                grid.width(),
                grid.height()
            );
            return Vec::new();
        }
        if grid.unreachable(&request.start, &request.end) {
            return Vec::new();
        }
        let end = request.end;
        match astar_search(
            &request.start,
            |node| self.neighbours(grid, *node),
            |node| self.heuristic.estimate(*node, end),
            |node| *node == end,
            self.expansion_limit,
        ) {
            Some((path, cost)) => {
                info!(
                    "Path from {} to {} has {} waypoints, cost {}",
                    request.start,
                    end,
                    path.len(),
                    cost
                );
                path
            }
            None => Vec::new(),
        }
    }

    fn neighbours(&self, grid: &GridModel, node: Point) -> Vec<(Point, i32)> {
        let mut result = Vec::with_capacity(8);
        for (dx, dy) in CARDINAL_STEPS {
            let next = Point::new(node.x + dx, node.y + dy);
            if grid.is_passable(next) {
                result.push((next, CARDINAL_COST));
            }
        }
        if self.movement == Movement::Diagonal {
            for (dx, dy) in DIAGONAL_STEPS {
                let next = Point::new(node.x + dx, node.y + dy);
                if grid.is_passable(next) {
                    result.push((next, DIAGONAL_COST));
                }
            }
        }
        result
    }
}

/// Total step cost of a returned path. Adjacent waypoints are assumed to be
/// one step apart, as [PathFinder::find_path] produces them.
pub fn path_cost(path: &[Point]) -> i32 {
    path.windows(2)
        .map(|pair| {
            let dx = (pair[0].x - pair[1].x).abs();
            let dy = (pair[0].y - pair[1].y).abs();
            if dx == 1 && dy == 1 {
                DIAGONAL_COST
            } else {
                CARDINAL_COST
            }
        })
        .sum()
}
