use grid_astar::{GridModel, Heuristic, Movement, PathFinder, PathRequest};
use grid_util::point::Point;

// In this example a path is found on a grid with shape
// ..#..
// ..#..
// ..#..
// S.#.E
// .....
// S marks the start, E the end; the wall at x = 2 has a single gap at y = 0,
// so the route dips below the wall.
fn main() {
    let mut grid = GridModel::new(5, 5);
    for y in 1..5 {
        grid.add_obstacle(Point::new(2, y));
    }
    grid.update();
    println!("{}", grid);

    let finder = PathFinder::new(Movement::Orthogonal, Heuristic::Manhattan);
    let request = PathRequest::new(Point::new(0, 1), Point::new(4, 1));
    let path = finder.find_path(&grid, request);
    if path.is_empty() {
        println!("No path exists");
    } else {
        println!("A path has been found (goal first):");
        for p in path {
            println!("{:?}", p);
        }
    }
}
