use grid_astar::{Agent, GridModel, Heuristic, Movement, PathFinder, PathRequest};
use grid_util::point::Point;

// Solves a small detour problem and walks an agent along the result one
// waypoint per tick, the way a render loop would drive it.
fn main() {
    let mut grid = GridModel::new(10, 10);
    for y in 0..8 {
        grid.add_obstacle(Point::new(4, y));
    }
    grid.update();

    let finder = PathFinder::new(Movement::Diagonal, Heuristic::Octagonal);
    let start = Point::new(1, 1);
    let end = Point::new(8, 2);
    let path = finder.find_path(&grid, PathRequest::new(start, end));
    if path.is_empty() {
        println!("No path exists");
        return;
    }

    let mut agent = Agent::new(start);
    agent.follow_path(path);
    println!("Starting at {}", agent.position());
    while agent.advance() {
        println!("Moved to {}", agent.position());
    }
    println!("Goal reached at {}", agent.position());
}
