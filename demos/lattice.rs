use grid_astar::{AstarSolver, CellTag, GridSolver, PathingGrid, Point};

// A 36x30 grid with an obstacle wherever both coordinates are positive multiples of 4. The
// grid is printed with the endpoints tagged, followed by the path itself.

fn main() {
    env_logger::init();
    let mut pathing_grid = PathingGrid::with_lattice_obstacles(36, 30, 4).unwrap();
    let start = Point::new(0, 0);
    let goal = Point::new(27, 22);
    let result = AstarSolver::new()
        .get_path_single_goal(&mut pathing_grid, start, goal)
        .unwrap();
    pathing_grid.set_cell_value(start.x, start.y, CellTag::Start).unwrap();
    pathing_grid.set_cell_value(goal.x, goal.y, CellTag::Goal).unwrap();
    println!("{}", pathing_grid);
    match result.path() {
        Some(path) => {
            println!("Path of cost {:?}:", result.cost());
            for p in path {
                println!("{:?}", p);
            }
        }
        None => println!("No path from {start} to {goal}"),
    }
    let neighbours = pathing_grid.adjacent_points(4, 3).unwrap();
    println!("Neighbours of (4, 3): {:?}", neighbours);
}
