use rand::{Rng, rngs::StdRng, seq::IteratorRandom};
use rand_set::RandSetDefault;

use crate::{
    generators::MazeGenerator,
    maze::{Coord, Maze, odd_dimension},
};

/// Distance between two vertices of the lattice
const STEP: usize = 2;

/// Removes a uniformly random frontier cell.
///
/// The pick goes through `rng` rather than `RandSet::get_rand`, so seeded
/// generation stays reproducible.
fn take_random(frontiers: &mut RandSetDefault<Coord>, rng: &mut StdRng) -> Option<Coord> {
    let frontier = frontiers.iter().choose(rng).copied()?;
    frontiers.remove(&frontier);
    Some(frontier)
}

/// Randomized Prim: grow a single tree outward from a random cell, attaching one
/// frontier cell at a time.
pub struct Prim;

impl MazeGenerator for Prim {
    fn generate(&self, height: usize, width: usize, rng: &mut StdRng) -> Maze {
        randomized_prim(height, width, rng)
    }
}

/// Walls `STEP` cells away from `coord`, i.e. unvisited vertices.
fn wall_neighbors(maze: &Maze, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
    maze.neighbors_at(coord, STEP)
        .filter(move |&c| maze[c].is_wall())
}

fn randomized_prim(height: usize, width: usize, rng: &mut StdRng) -> Maze {
    let height = odd_dimension(height);
    let width = odd_dimension(width);
    // Initialize the maze with walls
    let mut maze = Maze::filled_with_walls(height, width);

    // A single row or column has no odd/odd cell to start from
    if height < 3 || width < 3 {
        return maze;
    }

    // Initialize the starting point on a random odd/odd cell
    let start = Coord::new(
        rng.random_range(0..height / 2) * 2 + 1,
        rng.random_range(0..width / 2) * 2 + 1,
    );
    maze.carve(start, rng);

    let mut frontiers = wall_neighbors(&maze, start).collect::<RandSetDefault<_>>();

    let mut carved = 0;
    let mut peak_frontier = frontiers.len();
    while let Some(frontier) = take_random(&mut frontiers, rng) {
        // Parts of the tree that this frontier cell touches
        let passage_neighbors = maze
            .neighbors_at(frontier, STEP)
            .filter(|&c| maze[c].is_passage())
            .collect::<Vec<_>>();

        // Attach through exactly one neighbor so the tree never gains a cycle
        let neighbor = match passage_neighbors.as_slice() {
            [] => continue,
            [only] => *only,
            several => several[rng.random_range(0..several.len())],
        };

        maze.carve(frontier, rng);
        maze.carve(frontier.midpoint(neighbor), rng);
        carved += 1;

        for coord in wall_neighbors(&maze, frontier).collect::<Vec<_>>() {
            frontiers.insert(coord);
        }
        peak_frontier = peak_frontier.max(frontiers.len());
    }

    tracing::debug!(
        "[prim] generated {}x{} maze from {}, {} passages carved, frontier peaked at {}",
        height,
        width,
        start,
        carved,
        peak_frontier
    );
    maze
}
