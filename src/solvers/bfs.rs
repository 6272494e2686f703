use std::collections::VecDeque;

use super::{MazeSolver, SolveError, check_endpoint, reconstruct_path};
use crate::maze::{Coord, Maze};

/// Breadth-first search. Finds a path with the fewest cells, ignoring surfaces.
pub struct Bfs;

impl MazeSolver for Bfs {
    fn solve(&self, maze: &Maze, start: Coord, end: Coord) -> Result<Vec<Coord>, SolveError> {
        check_endpoint(maze, start)?;
        check_endpoint(maze, end)?;
        Ok(solve_bfs(maze, start, end))
    }
}

fn solve_bfs(maze: &Maze, start: Coord, end: Coord) -> Vec<Coord> {
    let size = maze.height() * maze.width();
    let mut visited = vec![false; size];
    let mut predecessors: Vec<Option<Coord>> = vec![None; size];

    let mut queue = VecDeque::from([start]);
    // Cells are marked when queued so each one is queued at most once
    visited[maze.index_of(start)] = true;

    let mut explored = 0usize;
    while let Some(current) = queue.pop_front() {
        explored += 1;
        if current == end {
            tracing::debug!("[bfs] reached {} after exploring {} cells", end, explored);
            return reconstruct_path(maze, &predecessors, start, end);
        }

        for neighbor in maze.passage_neighbors(current) {
            let idx = maze.index_of(neighbor);
            if !visited[idx] {
                visited[idx] = true;
                predecessors[idx] = Some(current);
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!("[bfs] {} unreachable from {} ({} cells explored)", end, start, explored);
    Vec::new() // No path found
}
