//! World bounds and the static obstacle set.
//!
//! [GridModel] answers the in-bounds and collision queries the search runs
//! against. It also maintains connected components over the passable cells
//! using a [UnionFind] structure so that requests between cells in different
//! components can be rejected without flood-filling the whole grid.

use core::fmt;
use fxhash::FxHashSet;
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

/// A bounded grid with point obstacles. A coordinate is passable iff
/// `0 <= x < width`, `0 <= y < height` and it carries no obstacle.
///
/// Components are kept 8-connected, which over-approximates orthogonal
/// reachability; [GridModel::unreachable] therefore never rejects a request
/// that either movement model could satisfy. Obstacle additions leave the
/// component map stale until [GridModel::update] runs. A stale map can only
/// over-connect (removals union immediately), so rejections stay sound.
#[derive(Clone, Debug)]
pub struct GridModel {
    width: usize,
    height: usize,
    obstacles: FxHashSet<Point>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl GridModel {
    /// Creates an obstacle-free grid. Bounds are expected to be positive; a
    /// zero-sized grid has no passable cells and every search on it is empty.
    pub fn new(width: usize, height: usize) -> GridModel {
        let mut grid = GridModel {
            width,
            height,
            obstacles: FxHashSet::default(),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Replaces the world bounds, keeping the obstacle set. Cells outside the
    /// new bounds simply become impassable; their obstacles stay in the set.
    pub fn set_bounds(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        // Cell indices depend on the width, so the old component map is
        // meaningless now.
        self.generate_components();
    }

    /// Marks a cell as blocked. Adding an obstacle twice is a no-op.
    pub fn add_obstacle(&mut self, coordinate: Point) {
        if self.obstacles.insert(coordinate) {
            self.components_dirty = true;
        }
    }

    /// Unblocks a cell. Removing a missing obstacle is a no-op. The freed
    /// cell is joined to the components of its passable neighbours right
    /// away.
    pub fn remove_obstacle(&mut self, coordinate: Point) {
        if self.obstacles.remove(&coordinate) && self.in_bounds(coordinate) {
            let ix = self.get_ix(coordinate);
            for neighbour in self.moore_neighbourhood(coordinate) {
                if self.is_passable(neighbour) {
                    let n_ix = self.get_ix(neighbour);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }

    pub fn in_bounds(&self, coordinate: Point) -> bool {
        coordinate.x >= 0
            && coordinate.y >= 0
            && (coordinate.x as usize) < self.width
            && (coordinate.y as usize) < self.height
    }

    pub fn is_passable(&self, coordinate: Point) -> bool {
        self.in_bounds(coordinate) && !self.obstacles.contains(&coordinate)
    }

    fn get_ix(&self, coordinate: Point) -> usize {
        (coordinate.y as usize) * self.width + (coordinate.x as usize)
    }

    fn moore_neighbourhood(&self, coordinate: Point) -> Vec<Point> {
        let mut neighbours = Vec::with_capacity(8);
        for dx in -1..=1 {
            for dy in -1..=1 {
                if (dx, dy) != (0, 0) {
                    neighbours.push(Point::new(coordinate.x + dx, coordinate.y + dy));
                }
            }
        }
        neighbours
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up grid neighbours to
    /// the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for x in 0..self.width as i32 {
            for y in 0..self.height as i32 {
                let point = Point::new(x, y);
                if !self.is_passable(point) {
                    continue;
                }
                let parent_ix = self.get_ix(point);
                // Forward neighbours only; each unordered pair is visited
                // once over the scan. Both diagonals are needed for
                // 8-connectivity.
                let forward = [
                    Point::new(x + 1, y),
                    Point::new(x, y + 1),
                    Point::new(x + 1, y + 1),
                    Point::new(x + 1, y - 1),
                ];
                for neighbour in forward {
                    if self.is_passable(neighbour) {
                        let ix = self.get_ix(neighbour);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }

    /// Checks whether `goal` is known to be in a different component than
    /// `start`. Out-of-bounds endpoints are unreachable by definition.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(*start) && self.in_bounds(*goal) {
            let start_ix = self.get_ix(*start);
            let goal_ix = self.get_ix(*goal);
            if self.components.equiv(start_ix, goal_ix) {
                false
            } else {
                info!("{} and {} are in different components", start, goal);
                true
            }
        } else {
            true
        }
    }
}

impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.height as i32).rev() {
            for x in 0..self.width as i32 {
                if self.is_passable(Point::new(x, y)) {
                    write!(f, ".")?;
                } else {
                    write!(f, "#")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
