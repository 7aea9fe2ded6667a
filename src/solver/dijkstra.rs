use grid_util::point::Point;

use crate::solver::GridSolver;

/// A* with a zero heuristic, which makes it Dijkstra's algorithm.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Point, _: &Point) -> f64 {
        0.0
    }
}
