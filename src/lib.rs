//! # grid_astar
//!
//! A grid-based pathfinding system. Implements
//! [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) over a
//! bounded grid with static point obstacles, a configurable movement model
//! (orthogonal-only or orthogonal plus diagonal) and a pluggable cost
//! heuristic. Costs are fixed-point: 10 per cardinal step and 14 per
//! diagonal step. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! Solved paths come back ordered goal-first and are consumed one waypoint
//! at a time through a [PathCursor]; an [Agent] pairs such a cursor with a
//! position so a driving loop can walk it along the route step by step.
mod astar;

pub mod agent;
pub mod cursor;
pub mod grid;
pub mod heuristic;
pub mod pathfinder;

pub use agent::{lerp, Agent};
pub use cursor::PathCursor;
pub use grid::GridModel;
pub use heuristic::{Heuristic, HeuristicFn};
pub use pathfinder::{
    path_cost, Movement, PathFinder, PathRequest, CARDINAL_COST, DIAGONAL_COST,
};
