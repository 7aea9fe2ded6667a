use grid_util::point::Point;
use itertools::Itertools;

use crate::error::Result;
use crate::euclidean_distance;
use crate::pathing_grid::PathingGrid;
use crate::search::{AstarSearch, PathResult};

pub mod astar;
pub mod dijkstra;

/// Strategy plugged into [AstarSearch]. Implementors choose the heuristic; moves between
/// linked cells cost their Euclidean distance unless [cost](Self::cost) is overridden.
pub trait GridSolver {
    fn heuristic(&self, p1: &Point, p2: &Point) -> f64;

    /// Cost of moving between two linked cells.
    fn cost(&self, p1: &Point, p2: &Point) -> f64 {
        euclidean_distance(p1, p2)
    }

    /// Whether to consult the grid's connected components before searching, which avoids
    /// flood-filling the grid when no path exists.
    fn check_components(&self) -> bool {
        false
    }

    /// Computes a path from start to goal, failing if either lies outside the grid or is an
    /// obstacle.
    fn get_path_single_goal(
        &self,
        grid: &mut PathingGrid,
        start: Point,
        goal: Point,
    ) -> Result<PathResult> {
        AstarSearch::new(self, grid, start, goal)?.run()
    }

    /// Sum of the move costs along a path.
    fn get_path_cost(&self, path: &[Point]) -> f64 {
        path.iter()
            .tuple_windows()
            .map(|(p1, p2)| self.cost(p1, p2))
            .sum()
    }
}
