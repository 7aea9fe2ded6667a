use core::fmt;
use grid_util::point::Point;
use log::{debug, info};
use petgraph::unionfind::UnionFind;

use crate::cell::{Cell, CellTag};
use crate::error::{PathingError, Result};

/// [PathingGrid] owns every [Cell] of a `width` by `height` grid in a dense row-major arena,
/// so the cell of `(x, y)` lives at index `y * width + x`. Cells are linked to their
/// 4-neighbourhood at construction; marking a cell as an obstacle unlinks it for good.
///
/// Connected components of the adjacency graph are kept in a [UnionFind] structure to answer
/// reachability queries without searching.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl PathingGrid {
    /// Creates a grid without obstacles.
    pub fn new(width: usize, height: usize) -> Result<PathingGrid> {
        PathingGrid::with_obstacles(width, height, std::iter::empty())
    }

    /// Creates a grid where the given points are obstacles from the start. Obstacles are
    /// placed before the cells are linked, so they never appear in any adjacency.
    pub fn with_obstacles<I>(width: usize, height: usize, obstacles: I) -> Result<PathingGrid>
    where
        I: IntoIterator<Item = Point>,
    {
        let n = width
            .checked_mul(height)
            .filter(|&n| n > 0 && i32::try_from(width).is_ok() && i32::try_from(height).is_ok())
            .ok_or(PathingError::InvalidDimensions { width, height })?;
        let mut cells = Vec::with_capacity(n);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                cells.push(Cell::new(Point::new(x, y)));
            }
        }
        let mut grid = PathingGrid {
            width,
            height,
            cells,
            components: UnionFind::new(n),
            components_dirty: false,
        };
        for p in obstacles {
            let ix = grid.get_ix_point(&p)?;
            grid.cells[ix].is_obstacle = true;
            grid.cells[ix].tag = CellTag::Obstacle;
        }
        grid.link_cells();
        grid.generate_components();
        Ok(grid)
    }

    /// Creates a grid with an obstacle at every `(i, j)` where both `i` and `j` are positive
    /// multiples of `spacing`. A `spacing` of zero places no obstacles.
    pub fn with_lattice_obstacles(
        width: usize,
        height: usize,
        spacing: usize,
    ) -> Result<PathingGrid> {
        let lattice = (spacing > 0)
            .then(|| {
                (spacing..width).step_by(spacing).flat_map(move |i| {
                    (spacing..height)
                        .step_by(spacing)
                        .map(move |j| Point::new(i as i32, j as i32))
                })
            })
            .into_iter()
            .flatten();
        PathingGrid::with_obstacles(width, height, lattice)
    }

    fn link_cells(&mut self) {
        for ix in 0..self.cells.len() {
            let point = self.cells[ix].point;
            for n in neumann_neighbours(point) {
                if let Some(n_ix) = self.try_ix(&n) {
                    if !self.cells[n_ix].is_obstacle {
                        self.cells[ix].add_neighbour(n_ix);
                    }
                }
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }
    fn try_ix(&self, point: &Point) -> Option<usize> {
        self.in_bounds(point)
            .then(|| point.y as usize * self.width + point.x as usize)
    }
    /// Arena index of a point, failing if it lies outside the grid.
    pub fn get_ix_point(&self, point: &Point) -> Result<usize> {
        self.try_ix(point).ok_or(PathingError::OutOfBounds(*point))
    }
    /// Inverse of [get_ix_point](Self::get_ix_point). `ix` must be a valid arena index.
    pub fn point_of(&self, ix: usize) -> Point {
        self.cells[ix].point
    }
    pub fn cell(&self, point: &Point) -> Result<&Cell> {
        self.get_ix_point(point).map(|ix| &self.cells[ix])
    }
    pub(crate) fn cell_at(&self, ix: usize) -> &Cell {
        &self.cells[ix]
    }
    pub(crate) fn cell_at_mut(&mut self, ix: usize) -> &mut Cell {
        &mut self.cells[ix]
    }
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn is_obstacle(&self, x: i32, y: i32) -> Result<bool> {
        self.cell(&Point::new(x, y)).map(Cell::is_obstacle)
    }

    /// Points the cell at `(x, y)` is currently linked to.
    pub fn adjacent_points(&self, x: i32, y: i32) -> Result<Vec<Point>> {
        let cell = self.cell(&Point::new(x, y))?;
        Ok(cell
            .adjacent()
            .iter()
            .map(|&ix| self.cells[ix].point)
            .collect())
    }

    /// Marks `(x, y)` as an obstacle and unlinks it from all of its neighbours. This can only
    /// split components, so they are flagged as dirty rather than rebuilt.
    pub fn set_obstacle(&mut self, x: i32, y: i32) -> Result<()> {
        let ix = self.get_ix_point(&Point::new(x, y))?;
        let neighbours = std::mem::take(&mut self.cells[ix].adjacent);
        for &n in &neighbours {
            self.cells[n].remove_neighbour(ix);
        }
        let cell = &mut self.cells[ix];
        if !cell.is_obstacle {
            debug!(
                "Marking ({x}, {y}) as obstacle, unlinking {} neighbours",
                neighbours.len()
            );
            cell.is_obstacle = true;
            self.components_dirty = true;
        }
        cell.tag = CellTag::Obstacle;
        Ok(())
    }

    pub fn get_cell_value(&self, x: i32, y: i32) -> Result<CellTag> {
        self.cell(&Point::new(x, y)).map(Cell::tag)
    }

    /// Sets the display tag of `(x, y)`. Does not change whether the cell is an obstacle.
    pub fn set_cell_value(&mut self, x: i32, y: i32, tag: CellTag) -> Result<()> {
        let ix = self.get_ix_point(&Point::new(x, y))?;
        self.cells[ix].tag = tag;
        Ok(())
    }

    /// Clears the scores and parents left behind by a previous search.
    pub fn reset_scores(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset_scores);
    }

    /// Follows parents from `goal` back to the root of the last search and returns the path
    /// from start to goal. Returns [None] if the goal was not reached by that search.
    pub fn extract_path(&self, start: &Point, goal: &Point) -> Result<Option<Vec<Point>>> {
        let start_ix = self.get_ix_point(start)?;
        let goal_ix = self.get_ix_point(goal)?;
        if goal_ix != start_ix && self.cells[goal_ix].parent.is_none() {
            return Ok(None);
        }
        let mut path: Vec<Point> =
            std::iter::successors(Some(goal_ix), |&ix| self.cells[ix].parent)
                .take(self.cells.len())
                .map(|ix| self.cells[ix].point)
                .collect();
        path.reverse();
        Ok((path.first() == Some(start)).then_some(path))
    }

    /// Whether obstacles were placed since the components were last generated. Until
    /// [update](Self::update) runs, the components may still join cells that are no longer
    /// connected, but never separate cells that are.
    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }
    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Result<usize> {
        self.get_ix_point(point).map(|ix| self.components.find(ix))
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component. Points outside the grid are
    /// unreachable.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.try_ix(start), self.try_ix(goal)) {
            (Some(start_ix), Some(goal_ix)) => !self.components.equiv(start_ix, goal_ix),
            _ => true,
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and joins every pair of linked cells.
    pub fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.cells.len());
        for (ix, cell) in self.cells.iter().enumerate() {
            for &n in cell.adjacent().iter().filter(|&&n| n > ix) {
                components.union(ix, n);
            }
        }
        self.components = components;
        self.components_dirty = false;
    }
}

fn neumann_neighbours(p: Point) -> [Point; 4] {
    [
        Point::new(p.x - 1, p.y),
        Point::new(p.x + 1, p.y),
        Point::new(p.x, p.y - 1),
        Point::new(p.x, p.y + 1),
    ]
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                write!(f, "{}", cell.tag)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
