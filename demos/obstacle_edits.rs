use grid_astar::{AstarSolver, GridSolver, PathResult, PathingGrid, Point};

// Obstacles are added one by one and the path to the goal is recomputed on the same grid after
// each edit, until the goal is walled off.

fn main() {
    env_logger::init();
    let mut pathing_grid = PathingGrid::new(6, 6).unwrap();
    let solver = AstarSolver::new();
    let start = Point::new(0, 0);
    let goal = Point::new(5, 5);
    for (x, y) in [(1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5)] {
        match solver.get_path_single_goal(&mut pathing_grid, start, goal) {
            Ok(PathResult::Found { path, cost }) => {
                println!("Path of {} cells with cost {cost}", path.len())
            }
            Ok(PathResult::Unreachable) => println!("Goal is unreachable"),
            Err(e) => println!("Search failed: {e}"),
        }
        println!("Placing obstacle at ({x}, {y})");
        pathing_grid.set_obstacle(x, y).unwrap();
    }
    println!("{}", pathing_grid);
    let result = solver
        .get_path_single_goal(&mut pathing_grid, start, goal)
        .unwrap();
    println!("Final result: {:?}", result);
}
