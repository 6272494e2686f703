use std::{cmp::Reverse, collections::BinaryHeap};

use super::{MazeSolver, SolveError, check_endpoint, reconstruct_path};
use crate::maze::{Coord, Maze};

/// Dijkstra's algorithm over surface costs. Finds the cheapest path, which may
/// be longer than the shortest one.
pub struct Dijkstra;

impl MazeSolver for Dijkstra {
    fn solve(&self, maze: &Maze, start: Coord, end: Coord) -> Result<Vec<Coord>, SolveError> {
        check_endpoint(maze, start)?;
        check_endpoint(maze, end)?;
        Ok(solve_dijkstra(maze, start, end))
    }
}

/// Priority queue entry. Ordered by cost, then by push order, so equal-cost
/// cells come out first-in first-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct QueuedCell {
    cost: u32,
    seq: u64,
    coord: Coord,
}

fn solve_dijkstra(maze: &Maze, start: Coord, end: Coord) -> Vec<Coord> {
    let size = maze.height() * maze.width();
    let mut distances = vec![u32::MAX; size];
    let mut finalized = vec![false; size];
    let mut predecessors: Vec<Option<Coord>> = vec![None; size];

    // Using Reverse to turn the max-heap into a min-heap
    let mut pq: BinaryHeap<Reverse<QueuedCell>> = BinaryHeap::new();
    let mut seq = 0u64;
    distances[maze.index_of(start)] = 0;
    pq.push(Reverse(QueuedCell {
        cost: 0,
        seq,
        coord: start,
    }));

    while let Some(Reverse(current)) = pq.pop() {
        let current_idx = maze.index_of(current.coord);
        // Stale entry, a cheaper one was already processed
        if finalized[current_idx] {
            continue;
        }
        finalized[current_idx] = true;

        // Costs are never negative, so the first time the goal is finalized it is optimal
        if current.coord == end {
            tracing::debug!("[dijkstra] reached {} with cost {}", end, current.cost);
            return reconstruct_path(maze, &predecessors, start, end);
        }

        for neighbor in maze.passage_neighbors(current.coord) {
            let idx = maze.index_of(neighbor);
            if finalized[idx] {
                continue;
            }
            let candidate = current.cost + maze[neighbor].surface.cost();
            if candidate < distances[idx] {
                distances[idx] = candidate;
                predecessors[idx] = Some(current.coord);
                seq += 1;
                pq.push(Reverse(QueuedCell {
                    cost: candidate,
                    seq,
                    coord: neighbor,
                }));
            }
        }
    }

    tracing::debug!("[dijkstra] {} unreachable from {}", end, start);
    Vec::new() // No path found
}
