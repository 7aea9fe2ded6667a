//! # grid_astar
//!
//! Shortest paths on a mutable grid using [A*](https://en.wikipedia.org/wiki/A*_search_algorithm).
//! Cells are linked to their 4-neighbourhood when the [PathingGrid] is built and marking a
//! cell as an obstacle unlinks it from its neighbours. Moves cost the Euclidean distance between
//! cell centres, which is 1 for every move on this grid, and the default heuristic is the
//! Euclidean distance to the goal.
//!
//! The open list is an [IndexedPriorityQueue], a binary heap that can lower the priority of a
//! queued cell in place instead of queueing it again.
//!
//! ```
//! use grid_astar::{AstarSolver, GridSolver, PathingGrid, Point};
//!
//! let mut grid = PathingGrid::new(5, 5).unwrap();
//! grid.set_obstacle(2, 2).unwrap();
//! let result = AstarSolver::new()
//!     .get_path_single_goal(&mut grid, Point::new(0, 0), Point::new(4, 4))
//!     .unwrap();
//! assert_eq!(result.cost(), Some(8.0));
//! ```
pub mod cell;
pub mod error;
pub mod indexed_queue;
pub mod pathing_grid;
pub mod search;
pub mod solver;

pub use cell::{Cell, CellTag};
pub use error::{PathingError, Result};
pub use grid_util::point::Point;
pub use indexed_queue::IndexedPriorityQueue;
pub use pathing_grid::PathingGrid;
pub use search::{AstarSearch, PathResult, SearchState};
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};

/// Cost of a move between two linked cells.
pub const EDGE_COST: f64 = 1.0;
/// Local and global score of a cell the current search has not reached.
pub const UNVISITED_SCORE: f64 = f64::INFINITY;

/// Straight-line distance between two points. Admissible and consistent on this grid, where
/// every move has cost [EDGE_COST].
pub fn euclidean_distance(p1: &Point, p2: &Point) -> f64 {
    let dx = (p1.x - p2.x) as f64;
    let dy = (p1.y - p2.y) as f64;
    (dx * dx + dy * dy).sqrt()
}
