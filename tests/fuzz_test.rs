/// Fuzzes the search by comparing A* against a breadth-first reference on many random grids,
/// and the priority queue against a naive sorted list.
use grid_astar::{
    AstarSolver, DijkstraSolver, GridSolver, IndexedPriorityQueue, PathResult, PathingGrid,
    EDGE_COST,
};
use grid_util::point::Point;
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> PathingGrid {
    let mut pathing_grid = PathingGrid::new(w, h).unwrap();
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            if rng.gen_bool(0.35) {
                pathing_grid.set_obstacle(x, y).unwrap();
            }
        }
    }
    pathing_grid
}

/// Shortest path cost computed from the obstacle flags alone, ignoring the adjacency lists.
fn bfs_cost(grid: &PathingGrid, start: Point, goal: Point) -> Option<f64> {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    let free = |p: Point| {
        p.x >= 0 && p.y >= 0 && p.x < w && p.y < h && !grid.is_obstacle(p.x, p.y).unwrap()
    };
    let mut dist = vec![None; grid.width() * grid.height()];
    let ix = |p: Point| (p.y * w + p.x) as usize;
    let mut queue = VecDeque::from([start]);
    dist[ix(start)] = Some(0usize);
    while let Some(p) = queue.pop_front() {
        let d = dist[ix(p)].unwrap();
        if p == goal {
            return Some(d as f64 * EDGE_COST);
        }
        for n in [
            Point::new(p.x - 1, p.y),
            Point::new(p.x + 1, p.y),
            Point::new(p.x, p.y - 1),
            Point::new(p.x, p.y + 1),
        ] {
            if free(n) && dist[ix(n)].is_none() {
                dist[ix(n)] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

fn visualize_grid(grid: &PathingGrid, start: &Point, end: &Point) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.is_obstacle(x, y).unwrap() {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn random_free_point(grid: &PathingGrid, rng: &mut StdRng) -> Option<Point> {
    let free: Vec<Point> = grid
        .cells()
        .filter(|c| !c.is_obstacle())
        .map(|c| c.point())
        .collect();
    free.choose(rng).copied()
}

fn assert_valid_path(grid: &PathingGrid, path: &[Point], start: Point, goal: Point) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for (a, b) in path.iter().zip(path.iter().skip(1)) {
        assert!(grid.adjacent_points(a.x, a.y).unwrap().contains(b));
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let astar_solver = AstarSolver::new();
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        let (Some(start), Some(goal)) = (
            random_free_point(&grid, &mut rng),
            random_free_point(&grid, &mut rng),
        ) else {
            continue;
        };
        let reference = bfs_cost(&grid, start, goal);
        let result = astar_solver
            .get_path_single_goal(&mut grid, start, goal)
            .unwrap();
        if result.cost() != reference {
            visualize_grid(&grid, &start, &goal);
        }
        match (&result, reference) {
            (PathResult::Found { path, cost }, Some(expected)) => {
                assert!((cost - expected).abs() < 1e-9);
                assert!((astar_solver.get_path_cost(path) - expected).abs() < 1e-9);
                assert_valid_path(&grid, path, start, goal);
            }
            (PathResult::Unreachable, None) => {}
            _ => panic!("A* returned {result:?}, reference cost {reference:?}"),
        }
    }
}

/// A* and Dijkstra must agree on cost, and the component check must agree with both.
#[test]
fn fuzz_solvers_agree() {
    const N: usize = 8;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    let component_solver = AstarSolver {
        check_components: true,
        ..AstarSolver::new()
    };
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        let (Some(start), Some(goal)) = (
            random_free_point(&grid, &mut rng),
            random_free_point(&grid, &mut rng),
        ) else {
            continue;
        };
        let astar = component_solver
            .get_path_single_goal(&mut grid, start, goal)
            .unwrap();
        let dijkstra = DijkstraSolver
            .get_path_single_goal(&mut grid, start, goal)
            .unwrap();
        assert_eq!(astar.is_found(), grid.reachable(&start, &goal));
        assert_eq!(astar.is_found(), dijkstra.is_found());
        if let (Some(a), Some(d)) = (astar.cost(), dijkstra.cost()) {
            assert!((a - d).abs() < 1e-9);
        }
    }
}

/// Adjacency stays symmetric and free of obstacles under arbitrary edit sequences.
#[test]
fn fuzz_obstacle_edits() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let mut grid = PathingGrid::new(rng.gen_range(1..12), rng.gen_range(1..12)).unwrap();
        for _ in 0..rng.gen_range(0..40) {
            let x = rng.gen_range(-1..=grid.width() as i32);
            let y = rng.gen_range(-1..=grid.height() as i32);
            let in_bounds = grid.in_bounds(&Point::new(x, y));
            assert_eq!(grid.set_obstacle(x, y).is_ok(), in_bounds);
        }
        for cell in grid.cells() {
            let ix = grid.get_ix_point(&cell.point()).unwrap();
            if cell.is_obstacle() {
                assert!(cell.adjacent().is_empty());
            }
            for n in cell.adjacent() {
                let neighbour = grid.cell(&grid.point_of(*n)).unwrap();
                assert!(!neighbour.is_obstacle());
                assert!(neighbour.adjacent().contains(&ix));
            }
        }
    }
}

#[test]
fn fuzz_priority_queue() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let mut queue: IndexedPriorityQueue<u32, u32> = IndexedPriorityQueue::new();
        // Model: (priority, sequence, key)
        let mut model: Vec<(u32, u64, u32)> = Vec::new();
        let mut sequence = 0u64;
        for _ in 0..300 {
            let key = rng.gen_range(0..20);
            match rng.gen_range(0..3) {
                0 => {
                    let priority = rng.gen_range(0..50);
                    let present = model.iter().any(|e| e.2 == key);
                    assert_eq!(queue.push(key, priority).is_err(), present);
                    if !present {
                        model.push((priority, sequence, key));
                    }
                    sequence += 1;
                }
                1 => {
                    let priority = rng.gen_range(0..50);
                    match model.iter_mut().find(|e| e.2 == key) {
                        Some(entry) => {
                            let lowered = entry.0.min(priority);
                            queue.decrease_key(&key, lowered).unwrap();
                            // Only a strictly lower priority changes the entry's rank
                            if lowered < entry.0 {
                                *entry = (lowered, sequence, key);
                            }
                        }
                        None => assert!(queue.decrease_key(&key, priority).is_err()),
                    }
                    sequence += 1;
                }
                _ => {
                    model.sort();
                    if model.is_empty() {
                        assert!(queue.pop_min().is_err());
                    } else {
                        let (priority, _, key) = model.remove(0);
                        assert_eq!(queue.pop_min().unwrap(), (key, priority));
                    }
                }
            }
            assert_eq!(queue.len(), model.len());
        }
    }
}
