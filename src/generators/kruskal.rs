use rand::{rngs::StdRng, seq::SliceRandom};

use crate::{
    generators::MazeGenerator,
    maze::{Cell, Coord, Maze, Surface, odd_dimension},
};

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        // Iterative with path halving, deep trees would blow the stack on big mazes
        let mut x = x;
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

/// Candidate passage between two vertices two cells apart
#[derive(Clone, Copy)]
struct Edge {
    cell1: Coord,
    cell2: Coord,
}

/// Randomized Kruskal: every odd/odd cell starts as its own set, shuffled walls
/// between them are knocked down whenever they separate two different sets.
pub struct Kruskal;

impl MazeGenerator for Kruskal {
    fn generate(&self, height: usize, width: usize, rng: &mut StdRng) -> Maze {
        randomized_kruskal(height, width, rng)
    }
}

fn randomized_kruskal(height: usize, width: usize, rng: &mut StdRng) -> Maze {
    let height = odd_dimension(height);
    let width = odd_dimension(width);
    let mut maze = Maze::filled_with_walls(height, width);

    // Vertices live on odd rows and columns
    let vertex_cols = width / 2;
    let vertex_rows = height / 2;
    let vertex_index = |c: Coord| (c.row / 2) * vertex_cols + c.col / 2;

    let vertices = (0..vertex_rows)
        .flat_map(|r| (0..vertex_cols).map(move |c| Coord::new(r * 2 + 1, c * 2 + 1)))
        .collect::<Vec<_>>();
    for &vertex in &vertices {
        maze.carve(vertex, rng);
    }

    let mut uf = UnionFind::new(vertices.len());

    // Collect all possible edges: one down and one to the right of every vertex
    let mut edges: Vec<Edge> = vertices
        .iter()
        .flat_map(|&v| {
            [
                (v.row + 2 < height).then(|| Edge {
                    cell1: v,
                    cell2: Coord::new(v.row + 2, v.col),
                }),
                (v.col + 2 < width).then(|| Edge {
                    cell1: v,
                    cell2: Coord::new(v.row, v.col + 2),
                }),
            ]
        })
        .flatten()
        .collect();

    // Shuffle edges randomly
    edges.shuffle(rng);

    let mut carved = 0;
    for edge in edges {
        // If cells are not yet connected, remove the wall between them
        if uf.unite(vertex_index(edge.cell1), vertex_index(edge.cell2)) {
            let wall = edge.cell1.midpoint(edge.cell2);
            maze.set(Cell::passage(wall, Surface::random(rng)));
            carved += 1;
        }
    }

    tracing::debug!(
        "[kruskal] generated {}x{} maze, {} vertices joined by {} passages",
        height,
        width,
        vertices.len(),
        carved
    );
    maze
}
