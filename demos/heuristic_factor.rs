use grid_astar::{AstarSearch, AstarSolver, PathingGrid, Point};

// The heuristic_factor can be set to scale the heuristic, causing cells that are closer to the
// goal (ignoring obstacles) to be expanded sooner than in normal operation. This is called
// Weighted A* and it can speed up the search at the cost of optimality.

fn main() {
    env_logger::init();
    const N: usize = 30;
    let mut pathing_grid = PathingGrid::with_lattice_obstacles(N, N, 3).unwrap();
    let start = Point::new(1, 1);
    let end = Point::new(N as i32 - 3, N as i32 - 3);
    for heuristic_factor in [1.0, 1.3, 2.0] {
        let solver = AstarSolver {
            heuristic_factor,
            ..AstarSolver::new()
        };
        let mut search = AstarSearch::new(&solver, &mut pathing_grid, start, end).unwrap();
        while !search.step().unwrap().is_finished() {}
        let expanded = search.expanded().count();
        let result = search.run().unwrap();
        println!(
            "factor {heuristic_factor}: cost {:?}, {expanded} cells expanded",
            result.cost()
        );
    }
}
