use grid_util::point::Point;

use crate::{euclidean_distance, solver::GridSolver};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f64,
    pub check_components: bool,
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
            check_components: false,
        }
    }
}

impl GridSolver for AstarSolver {
    /// Euclidean distance times the heuristic factor. With a factor above 1 the heuristic is
    /// no longer admissible and returned paths may be longer than the shortest one.
    fn heuristic(&self, p1: &Point, p2: &Point) -> f64 {
        euclidean_distance(p1, p2) * self.heuristic_factor
    }

    fn check_components(&self) -> bool {
        self.check_components
    }
}
