use core::fmt;
use grid_util::point::Point;
use smallvec::SmallVec;

use crate::UNVISITED_SCORE;

/// Display tag of a cell. Only read by whatever draws the grid; the search looks at
/// [Cell::is_obstacle] instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellTag {
    #[default]
    Free,
    Obstacle,
    Start,
    Goal,
}

impl fmt::Display for CellTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match self {
            CellTag::Free => '.',
            CellTag::Obstacle => '#',
            CellTag::Start => 'S',
            CellTag::Goal => 'G',
        };
        write!(f, "{c}")
    }
}

/// A vertex of the [PathingGrid](crate::pathing_grid::PathingGrid). Neighbours and the parent
/// are stored as indices into the grid's cell arena.
#[derive(Clone, Debug)]
pub struct Cell {
    pub(crate) point: Point,
    pub(crate) is_obstacle: bool,
    pub(crate) tag: CellTag,
    /// Sorted and free of duplicates.
    pub(crate) adjacent: SmallVec<[usize; 4]>,
    pub(crate) local_score: f64,
    pub(crate) global_score: f64,
    pub(crate) parent: Option<usize>,
}

impl Cell {
    pub(crate) fn new(point: Point) -> Cell {
        Cell {
            point,
            is_obstacle: false,
            tag: CellTag::Free,
            adjacent: SmallVec::new(),
            local_score: UNVISITED_SCORE,
            global_score: UNVISITED_SCORE,
            parent: None,
        }
    }

    pub fn point(&self) -> Point {
        self.point
    }
    pub fn is_obstacle(&self) -> bool {
        self.is_obstacle
    }
    pub fn tag(&self) -> CellTag {
        self.tag
    }
    /// Indices of the cells this cell is linked to, in ascending order.
    pub fn adjacent(&self) -> &[usize] {
        &self.adjacent
    }
    /// Cost of the best known path from the start of the last search ("g").
    pub fn local_score(&self) -> f64 {
        self.local_score
    }
    /// Local score plus the heuristic estimate to the goal ("f").
    pub fn global_score(&self) -> f64 {
        self.global_score
    }
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Links `ix` unless this cell is an obstacle. Keeps the adjacency sorted.
    pub(crate) fn add_neighbour(&mut self, ix: usize) {
        if self.is_obstacle {
            return;
        }
        if let Err(pos) = self.adjacent.binary_search(&ix) {
            self.adjacent.insert(pos, ix);
        }
    }

    pub(crate) fn remove_neighbour(&mut self, ix: usize) {
        if let Ok(pos) = self.adjacent.binary_search(&ix) {
            self.adjacent.remove(pos);
        }
    }

    pub(crate) fn reset_scores(&mut self) {
        self.local_score = UNVISITED_SCORE;
        self.global_score = UNVISITED_SCORE;
        self.parent = None;
    }
}
