use thiserror::Error;

mod bfs;
mod dijkstra;

pub use bfs::Bfs;
pub use dijkstra::Dijkstra;

use crate::maze::{Coord, Maze};

/// Rejected solver input. An unreachable goal is not an error, it yields an empty path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("{coord} lies outside the {height}x{width} maze")]
    OutOfBounds {
        coord: Coord,
        height: usize,
        width: usize,
    },
    #[error("{coord} is a wall")]
    NotPassage { coord: Coord },
}

/// Something that can find a path through a maze.
///
/// On success the path starts with `start`, ends with `end`, and moves one cell
/// up, down, left or right at a time. An empty path means `end` is unreachable.
pub trait MazeSolver {
    fn solve(&self, maze: &Maze, start: Coord, end: Coord) -> Result<Vec<Coord>, SolveError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Bfs,
    Dijkstra,
}

impl Solver {
    /// Available maze solvers, in menu order
    pub const ALL: [Solver; 2] = [Solver::Bfs, Solver::Dijkstra];

    pub fn description(self) -> &'static str {
        match self {
            Solver::Bfs => "Breadth-First Search (fewest steps)",
            Solver::Dijkstra => "Dijkstra's Algorithm (lowest surface cost)",
        }
    }

    fn algorithm(self) -> &'static dyn MazeSolver {
        match self {
            Solver::Bfs => &Bfs,
            Solver::Dijkstra => &Dijkstra,
        }
    }

    pub fn solve(self, maze: &Maze, start: Coord, end: Coord) -> Result<Vec<Coord>, SolveError> {
        self.algorithm().solve(maze, start, end)
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Checks that `coord` is inside the maze and not a wall.
pub fn check_endpoint(maze: &Maze, coord: Coord) -> Result<(), SolveError> {
    match maze.cell(coord) {
        None => Err(SolveError::OutOfBounds {
            coord,
            height: maze.height(),
            width: maze.width(),
        }),
        Some(cell) if cell.is_wall() => Err(SolveError::NotPassage { coord }),
        Some(_) => Ok(()),
    }
}

/// Total surface cost of walking `path`. The first cell is where we stand, so it is free.
pub fn path_cost(maze: &Maze, path: &[Coord]) -> u32 {
    path.iter().skip(1).map(|&c| maze[c].surface.cost()).sum()
}

/// Walks predecessor links back from `end` and returns the path in travel order.
/// `predecessors` is indexed by `Maze::index_of`.
fn reconstruct_path(
    maze: &Maze,
    predecessors: &[Option<Coord>],
    start: Coord,
    end: Coord,
) -> Vec<Coord> {
    let mut path = vec![end];
    let mut step = end;
    while step != start {
        match predecessors[maze.index_of(step)] {
            Some(prev) => {
                path.push(prev);
                step = prev;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
pub(crate) mod checks {
    use crate::maze::{Coord, Maze};

    /// Consecutive cells are orthogonally adjacent passages.
    pub fn assert_walkable(maze: &Maze, path: &[Coord]) {
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(a.row.abs_diff(b.row) + a.col.abs_diff(b.col), 1, "{a} -> {b} is not a step");
        }
        assert!(path.iter().all(|&c| maze.is_passage(c)), "path crosses a wall");
    }

    /// Exhaustive search over simple paths; only usable on tiny mazes.
    /// Returns (fewest cells, lowest cost) over every path from `start` to `end`.
    pub fn brute_force_optimum(maze: &Maze, start: Coord, end: Coord) -> Option<(usize, u32)> {
        fn walk(
            maze: &Maze,
            current: Coord,
            end: Coord,
            on_path: &mut Vec<bool>,
            len: usize,
            cost: u32,
            best: &mut Option<(usize, u32)>,
        ) {
            if current == end {
                *best = Some(match *best {
                    Some((l, c)) => (l.min(len), c.min(cost)),
                    None => (len, cost),
                });
                return;
            }
            for next in maze.passage_neighbors(current).collect::<Vec<_>>() {
                let idx = maze.index_of(next);
                if !on_path[idx] {
                    on_path[idx] = true;
                    let step_cost = maze[next].surface.cost();
                    walk(maze, next, end, on_path, len + 1, cost + step_cost, best);
                    on_path[idx] = false;
                }
            }
        }

        let mut on_path = vec![false; maze.height() * maze.width()];
        on_path[maze.index_of(start)] = true;
        let mut best = None;
        walk(maze, start, end, &mut on_path, 1, 0, &mut best);
        best
    }
}
