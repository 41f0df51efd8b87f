/// Fuzzes the search by checking for many random grids that a path is found
/// exactly when the goal is reachable, and that the path cost matches an
/// exhaustive uniform-cost reference. Both movement models are tested with
/// their admissible heuristics.
use grid_astar::{
    path_cost, Agent, GridModel, Heuristic, Movement, PathFinder, PathRequest,
};
use grid_util::point::Point;
use rand::prelude::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> GridModel {
    let mut grid = GridModel::new(w, h);
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            if rng.gen_bool(0.4) {
                grid.add_obstacle(Point::new(x, y));
            }
        }
    }
    grid.remove_obstacle(Point::new(0, 0));
    grid.remove_obstacle(Point::new(w as i32 - 1, h as i32 - 1));
    grid.update();
    grid
}

fn visualize_grid(grid: &GridModel, start: &Point, end: &Point) {
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if !grid.is_passable(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn step_deltas(movement: Movement) -> Vec<(i32, i32, i32)> {
    let mut deltas = vec![(0, 1, 10), (1, 0, 10), (0, -1, 10), (-1, 0, 10)];
    if movement == Movement::Diagonal {
        deltas.extend([(1, 1, 14), (1, -1, 14), (-1, -1, 14), (-1, 1, 14)]);
    }
    deltas
}

/// Exhaustive uniform-cost search used as ground truth for both reachability
/// and cheapest cost.
fn reference_cost(grid: &GridModel, movement: Movement, start: Point, end: Point) -> Option<i32> {
    let w = grid.width() as i32;
    let ix = |p: Point| (p.y * w + p.x) as usize;
    let deltas = step_deltas(movement);
    let mut dist = vec![i32::MAX; grid.width() * grid.height()];
    let mut heap = BinaryHeap::new();
    dist[ix(start)] = 0;
    heap.push(Reverse((0, ix(start))));
    while let Some(Reverse((d, i))) = heap.pop() {
        if d > dist[i] {
            continue;
        }
        let p = Point::new(i as i32 % w, i as i32 / w);
        if p == end {
            return Some(d);
        }
        for (dx, dy, cost) in &deltas {
            let next = Point::new(p.x + dx, p.y + dy);
            if grid.is_passable(next) && d + cost < dist[ix(next)] {
                dist[ix(next)] = d + cost;
                heap.push(Reverse((d + cost, ix(next))));
            }
        }
    }
    None
}

#[test]
fn fuzz_reachability() {
    const N: usize = 10;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    for (movement, heuristic) in [
        (Movement::Orthogonal, Heuristic::Manhattan),
        (Movement::Diagonal, Heuristic::Octagonal),
    ] {
        let finder = PathFinder::new(movement, heuristic);
        let start = Point::new(0, 0);
        let end = Point::new(N as i32 - 1, N as i32 - 1);
        for _ in 0..N_GRIDS {
            let grid = random_grid(N, N, &mut rng);
            let reachable = reference_cost(&grid, movement, start, end).is_some();
            let path = finder.find_path(&grid, PathRequest::new(start, end));
            // Show the grid if the outcomes disagree
            if path.is_empty() == reachable {
                visualize_grid(&grid, &start, &end);
            }
            assert!(path.is_empty() != reachable);
        }
    }
}

#[test]
fn fuzz_optimal_cost() {
    const N: usize = 8;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    for (movement, heuristic) in [
        (Movement::Orthogonal, Heuristic::Manhattan),
        (Movement::Diagonal, Heuristic::Octagonal),
    ] {
        let finder = PathFinder::new(movement, heuristic);
        let start = Point::new(0, 0);
        let end = Point::new(N as i32 - 1, N as i32 - 1);
        for _ in 0..N_GRIDS {
            let grid = random_grid(N, N, &mut rng);
            let path = finder.find_path(&grid, PathRequest::new(start, end));
            match reference_cost(&grid, movement, start, end) {
                Some(expected) => {
                    let actual = path_cost(&path);
                    if actual != expected {
                        println!("expected cost {expected}, found {actual}: {path:?}");
                        visualize_grid(&grid, &start, &end);
                    }
                    assert_eq!(actual, expected);
                }
                None => assert!(path.is_empty()),
            }
        }
    }
}

/// Every solved path is walkable: consecutive waypoints are single legal
/// steps over passable cells, and an agent draining the route lands exactly
/// on the goal after `len - 1` consumptions.
#[test]
fn fuzz_paths_are_walkable() {
    const N: usize = 10;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(7);
    for (movement, heuristic) in [
        (Movement::Orthogonal, Heuristic::Manhattan),
        (Movement::Diagonal, Heuristic::Euclidean),
    ] {
        let finder = PathFinder::new(movement, heuristic);
        let start = Point::new(0, 0);
        let end = Point::new(N as i32 - 1, N as i32 - 1);
        for _ in 0..N_GRIDS {
            let grid = random_grid(N, N, &mut rng);
            let path = finder.find_path(&grid, PathRequest::new(start, end));
            if path.is_empty() {
                continue;
            }
            for pair in path.windows(2) {
                let dx = (pair[0].x - pair[1].x).abs();
                let dy = (pair[0].y - pair[1].y).abs();
                assert!(grid.is_passable(pair[0]) && grid.is_passable(pair[1]));
                match movement {
                    Movement::Orthogonal => assert_eq!(dx + dy, 1),
                    Movement::Diagonal => assert!(dx <= 1 && dy <= 1 && dx + dy >= 1),
                }
            }
            let steps = path.len() - 1;
            let mut agent = Agent::new(start);
            agent.follow_path(path);
            let mut taken = 0;
            while agent.advance() {
                taken += 1;
            }
            assert_eq!(taken, steps);
            assert_eq!(agent.position(), end);
        }
    }
}
