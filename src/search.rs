use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;
use log::{debug, info, warn};

use crate::error::{PathingError, Result};
use crate::indexed_queue::IndexedPriorityQueue;
use crate::pathing_grid::PathingGrid;
use crate::solver::GridSolver;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Initialized,
    Running,
    Found,
    Exhausted,
}

impl SearchState {
    pub fn is_finished(&self) -> bool {
        matches!(self, SearchState::Found | SearchState::Exhausted)
    }
}

/// Outcome of a completed search. Not finding a path is a regular result, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum PathResult {
    /// Path from start to goal, both included, and its total cost.
    Found {
        path: Vec<Point>,
        cost: f64,
    },
    Unreachable,
}

impl PathResult {
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            PathResult::Found { path, .. } => Some(path.as_slice()),
            PathResult::Unreachable => None,
        }
    }
    pub fn cost(&self) -> Option<f64> {
        match self {
            PathResult::Found { cost, .. } => Some(*cost),
            PathResult::Unreachable => None,
        }
    }
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }
}

/// A single A* run over a [PathingGrid]. Scores and parents are written into the grid's cells,
/// which is why the search holds the grid mutably until it is dropped.
pub struct AstarSearch<'g, S: GridSolver + ?Sized> {
    solver: &'g S,
    grid: &'g mut PathingGrid,
    start: Point,
    goal: Point,
    goal_ix: usize,
    open: IndexedPriorityQueue<usize, f64>,
    closed: FxIndexSet<usize>,
    state: SearchState,
}

impl<'g, S: GridSolver + ?Sized> AstarSearch<'g, S> {
    /// Validates the endpoints, clears the scores of any previous search and queues the start.
    pub fn new(
        solver: &'g S,
        grid: &'g mut PathingGrid,
        start: Point,
        goal: Point,
    ) -> Result<AstarSearch<'g, S>> {
        let start_ix = grid.get_ix_point(&start)?;
        let goal_ix = grid.get_ix_point(&goal)?;
        for (ix, p) in [(start_ix, start), (goal_ix, goal)] {
            if grid.cell_at(ix).is_obstacle() {
                return Err(PathingError::ObstacleEndpoint(p));
            }
        }
        grid.reset_scores();

        let mut search = AstarSearch {
            solver,
            grid,
            start,
            goal,
            goal_ix,
            open: IndexedPriorityQueue::new(),
            closed: FxIndexSet::default(),
            state: SearchState::Initialized,
        };
        if solver.check_components() {
            search.grid.update();
            if search.grid.unreachable(&start, &goal) {
                info!("{} is not reachable from {}", goal, start);
                search.state = SearchState::Exhausted;
                return Ok(search);
            }
        }
        let h = solver.heuristic(&start, &goal);
        let cell = search.grid.cell_at_mut(start_ix);
        cell.local_score = 0.0;
        cell.global_score = h;
        search.open.push(start_ix, h)?;
        Ok(search)
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Cells taken off the open queue so far, in the order they were expanded.
    pub fn expanded(&self) -> impl Iterator<Item = Point> + '_ {
        self.closed.iter().map(|&ix| self.grid.point_of(ix))
    }

    /// Expands the best open cell. Does nothing once the search has finished.
    pub fn step(&mut self) -> Result<SearchState> {
        if self.state.is_finished() {
            return Ok(self.state);
        }
        self.state = SearchState::Running;
        if self.open.is_empty() {
            self.state = SearchState::Exhausted;
            return Ok(self.state);
        }
        let (current, _) = self.open.pop_min()?;
        self.closed.insert(current);
        let current_cell = self.grid.cell_at(current);
        let current_point = current_cell.point();
        if current_point == self.goal {
            self.state = SearchState::Found;
            return Ok(self.state);
        }
        let local_score = current_cell.local_score();
        let neighbours = current_cell.adjacent.clone();
        for n in neighbours {
            if self.closed.contains(&n) {
                continue;
            }
            let n_point = self.grid.point_of(n);
            let tentative = local_score + self.solver.cost(&current_point, &n_point);
            let h = self.solver.heuristic(&n_point, &self.goal);
            let cell = self.grid.cell_at_mut(n);
            if tentative < cell.local_score {
                cell.parent = Some(current);
                cell.local_score = tentative;
                cell.global_score = tentative + h;
                let score = cell.global_score;
                if self.open.contains(&n) {
                    self.open.decrease_key(&n, score)?;
                } else {
                    self.open.push(n, score)?;
                }
            }
        }
        Ok(self.state)
    }

    /// Runs the search to completion.
    pub fn run(mut self) -> Result<PathResult> {
        info!("Searching path from {} to {}", self.start, self.goal);
        while !self.step()?.is_finished() {}
        if self.state == SearchState::Exhausted {
            info!(
                "No path from {} to {} after expanding {} cells",
                self.start,
                self.goal,
                self.closed.len()
            );
            return Ok(PathResult::Unreachable);
        }
        let cost = self.grid.cell_at(self.goal_ix).local_score();
        match self.grid.extract_path(&self.start, &self.goal)? {
            Some(path) => {
                debug!("Expanded {} cells", self.closed.len());
                info!("Found path of length {} and cost {}", path.len(), cost);
                Ok(PathResult::Found { path, cost })
            }
            None => {
                warn!("Goal {} was reached but has no parent chain", self.goal);
                Ok(PathResult::Unreachable)
            }
        }
    }
}
