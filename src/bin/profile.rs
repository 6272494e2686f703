use std::time::{Duration, Instant};

use mazeroute::{
    generators::{Generator, get_rng},
    maze::Coord,
    solvers::{Solver, path_cost},
};

/// Largest maze profiled, in cells per side
const SIZE: usize = 511;

fn main() {
    tracing_subscriber::fmt().init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    for generator in Generator::ALL {
        for solver in Solver::ALL {
            let mut rng = get_rng(Some(0));
            let (mut generating, mut solving) = (Duration::ZERO, Duration::ZERO);
            let mut total_cost = 0u64;
            for _ in 0..num_iters {
                let started = Instant::now();
                let maze = generator.generate(SIZE, SIZE, &mut rng);
                generating += started.elapsed();

                let started = Instant::now();
                let end = Coord::new(maze.height() - 2, maze.width() - 2);
                match solver.solve(&maze, Coord::new(1, 1), end) {
                    Ok(path) => total_cost += u64::from(path_cost(&maze, &path)),
                    Err(e) => tracing::error!("{} failed: {}", solver, e),
                }
                solving += started.elapsed();
            }
            tracing::info!(
                "{} + {}: {} runs, generate {:?}, solve {:?}, mean path cost {}",
                generator,
                solver,
                num_iters,
                generating,
                solving,
                total_cost / num_iters.max(1) as u64
            );
        }
    }
}
