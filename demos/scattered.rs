use grid_astar::{Agent, GridModel, Heuristic, Movement, PathFinder, PathRequest};
use grid_util::point::Point;
use rand::prelude::*;

// Scatters random obstacles over a 25x25 world and paths an agent from the
// origin to (20, 20) with diagonal movement, keeping the start and goal rows
// and columns clear so a route always exists.
fn main() {
    let mut rng = StdRng::seed_from_u64(2018);
    let mut grid = GridModel::new(25, 25);
    for _ in 0..375 {
        let x = rng.gen_range(0..25);
        let y = rng.gen_range(0..25);
        if x != 0 && y != 0 && x != 20 && y != 20 {
            grid.add_obstacle(Point::new(x, y));
        }
    }
    grid.update();
    println!("{}", grid);
    println!("{} obstacles placed", grid.obstacle_count());

    let finder = PathFinder::new(Movement::Diagonal, Heuristic::Euclidean);
    let start = Point::new(0, 0);
    let end = Point::new(20, 20);
    let path = finder.find_path(&grid, PathRequest::new(start, end));
    if path.is_empty() {
        println!("No path exists");
        return;
    }
    println!("Path of {} waypoints found", path.len());

    let mut agent = Agent::new(start);
    agent.follow_path(path);
    while agent.advance() {
        println!("X: {}\tY: {}", agent.position().x, agent.position().y);
    }
}
