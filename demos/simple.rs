use grid_astar::{AstarSolver, CellTag, GridSolver, PathingGrid, Point};

// In this example a path is found on a 5x5 grid with shape
// S.#.G
// ..#..
// ..#..
// ..#..
// .....
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Cells have a 4-neighbourhood

fn main() {
    env_logger::init();
    let wall = (0..4).map(|y| Point::new(2, y));
    let mut pathing_grid = PathingGrid::with_obstacles(5, 5, wall).unwrap();
    pathing_grid.set_cell_value(0, 0, CellTag::Start).unwrap();
    pathing_grid.set_cell_value(4, 0, CellTag::Goal).unwrap();
    println!("{}", pathing_grid);
    let start = Point::new(0, 0);
    let end = Point::new(4, 0);
    let result = AstarSolver::new()
        .get_path_single_goal(&mut pathing_grid, start, end)
        .unwrap();
    if let Some(path) = result.path() {
        println!("A path of cost {:?} has been found:", result.cost());
        for p in path {
            println!("{:?}", p);
        }
    }
}
