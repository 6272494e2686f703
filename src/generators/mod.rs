use rand::{SeedableRng, rngs::StdRng};

mod kruskal;
mod prim;

pub use kruskal::Kruskal;
pub use prim::Prim;

use crate::maze::Maze;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Something that can lay out a perfect maze.
///
/// Even dimensions are rounded up to the next odd number before use, so the
/// returned maze may be one row or column larger than requested.
pub trait MazeGenerator {
    fn generate(&self, height: usize, width: usize, rng: &mut StdRng) -> Maze;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    Kruskal,
    Prim,
}

impl Generator {
    /// Available maze generators, in menu order
    pub const ALL: [Generator; 2] = [Generator::Prim, Generator::Kruskal];

    pub fn description(self) -> &'static str {
        match self {
            Generator::Kruskal => "Kruskal's Algorithm",
            Generator::Prim => "Prim's Algorithm",
        }
    }

    fn algorithm(self) -> &'static dyn MazeGenerator {
        match self {
            Generator::Kruskal => &Kruskal,
            Generator::Prim => &Prim,
        }
    }

    pub fn generate(self, height: usize, width: usize, rng: &mut StdRng) -> Maze {
        self.algorithm().generate(height, width, rng)
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

pub fn generate_maze(generator: Generator, height: usize, width: usize, seed: Option<u64>) -> Maze {
    let mut rng = get_rng(seed);
    generator.generate(height, width, &mut rng)
}

/// Structural checks shared by the generator tests.
#[cfg(test)]
pub(crate) mod checks {
    use std::collections::VecDeque;

    use crate::maze::{Coord, Maze};

    pub fn assert_pillars_are_walls(maze: &Maze) {
        for row in (0..maze.height()).step_by(2) {
            for col in (0..maze.width()).step_by(2) {
                let coord = Coord::new(row, col);
                assert!(maze[coord].is_wall(), "pillar {coord} was carved");
            }
        }
    }

    pub fn vertices(maze: &Maze) -> Vec<Coord> {
        (1..maze.height())
            .step_by(2)
            .flat_map(|row| (1..maze.width()).step_by(2).map(move |col| Coord::new(row, col)))
            .collect()
    }

    /// Carved cells sitting between two vertices.
    pub fn edges(maze: &Maze) -> usize {
        maze.cells()
            .iter()
            .filter(|cell| {
                let Coord { row, col } = cell.coord;
                cell.is_passage() && (row % 2 == 1) != (col % 2 == 1)
            })
            .count()
    }

    fn reachable_from(maze: &Maze, start: Coord) -> Vec<bool> {
        let mut seen = vec![false; maze.height() * maze.width()];
        let mut queue = VecDeque::from([start]);
        seen[maze.index_of(start)] = true;
        while let Some(current) = queue.pop_front() {
            for next in maze.passage_neighbors(current) {
                if !seen[maze.index_of(next)] {
                    seen[maze.index_of(next)] = true;
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    pub fn assert_spanning_tree(maze: &Maze) {
        assert_pillars_are_walls(maze);

        let vertices = vertices(maze);
        assert!(
            vertices.iter().all(|&v| maze[v].is_passage()),
            "every odd/odd cell must be a passage"
        );
        assert_eq!(edges(maze), vertices.len() - 1, "a spanning tree has V - 1 edges");

        let seen = reachable_from(maze, vertices[0]);
        assert!(
            vertices.iter().all(|&v| seen[maze.index_of(v)]),
            "all vertices must be connected"
        );
    }
}
