pub mod cell;
mod grid;

use thiserror::Error;

pub use cell::{Cell, CellType, Coord, Surface};
use grid::Grid;

/// Errors raised when building a maze from hand-made rows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("a maze needs at least one row and one column")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell stored at {slot} claims to be at {recorded}")]
    MisplacedCell { slot: Coord, recorded: Coord },
}

/// A rectangular maze. Once handed out by a generator it is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Creates a maze of the given size where every cell is a wall.
    pub(crate) fn filled_with_walls(height: usize, width: usize) -> Self {
        Maze {
            grid: Grid::walls(width, height),
        }
    }

    /// Builds a maze from explicit rows of cells.
    /// Every row must have the same length and each cell must record its own position.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(MazeError::Empty);
        }

        let mut data = Vec::with_capacity(height * width);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(MazeError::Ragged {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            for (col, cell) in cells.into_iter().enumerate() {
                let slot = Coord::new(row, col);
                if cell.coord != slot {
                    return Err(MazeError::MisplacedCell {
                        slot,
                        recorded: cell.coord,
                    });
                }
                data.push(cell);
            }
        }

        Ok(Maze {
            grid: Grid::from_cells(width, height, data),
        })
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.grid.get(coord)
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.grid.contains(coord)
    }

    pub fn is_passage(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(Cell::is_passage)
    }

    /// Flat index of `coord`, used by solvers to size their bookkeeping.
    pub fn index_of(&self, coord: Coord) -> usize {
        self.grid.ravel_index(coord)
    }

    /// Replaces the cell at `cell.coord`. Only generators mutate a maze.
    pub(crate) fn set(&mut self, cell: Cell) {
        self.grid.set(cell);
    }

    /// Turns the cell at `coord` into a passage with a freshly drawn surface.
    pub(crate) fn carve<R: rand::Rng + ?Sized>(&mut self, coord: Coord, rng: &mut R) {
        self.set(Cell::passage(coord, Surface::random(rng)));
    }

    /// In-bounds cells `step` cells away in the cardinal directions,
    /// in the order up, down, left, right.
    pub fn neighbors_at(&self, coord: Coord, step: usize) -> impl Iterator<Item = Coord> + '_ {
        let Coord { row, col } = coord;
        [
            // NOTE: checked_sub filters out moves past the top or left edge,
            // the bounds check below filters out moves past the bottom or right edge.
            row.checked_sub(step).map(|r| Coord::new(r, col)),
            row.checked_add(step).map(|r| Coord::new(r, col)),
            col.checked_sub(step).map(|c| Coord::new(row, c)),
            col.checked_add(step).map(|c| Coord::new(row, c)),
        ]
        .into_iter()
        .flatten()
        .filter(move |&c| self.is_in_bounds(c))
    }

    /// Adjacent passage cells, in the order up, down, left, right.
    pub fn passage_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors_at(coord, 1)
            .filter(move |&c| self.grid[c].is_passage())
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

/// Rounds an even dimension up to the next odd number so walls and cells alternate.
pub fn odd_dimension(n: usize) -> usize {
    if n % 2 == 0 { n + 1 } else { n }
}

/// Builds a maze from an ASCII sketch: `#` is a wall, `.` a normal passage,
/// `~` swamp, `s` sand, `$` coin, `g` good floor.
#[cfg(test)]
pub(crate) fn maze_from_ascii(lines: &[&str]) -> Maze {
    let rows = lines
        .iter()
        .enumerate()
        .map(|(row, line)| {
            line.chars()
                .enumerate()
                .map(|(col, ch)| {
                    let coord = Coord::new(row, col);
                    match ch {
                        '#' => Cell::wall(coord),
                        '.' => Cell::passage(coord, Surface::Normal),
                        '~' => Cell::passage(coord, Surface::Swamp),
                        's' => Cell::passage(coord, Surface::Sand),
                        '$' => Cell::passage(coord, Surface::Coin),
                        'g' => Cell::passage(coord, Surface::GoodFloor),
                        other => panic!("unknown maze symbol {other:?}"),
                    }
                })
                .collect()
        })
        .collect();
    Maze::from_rows(rows).expect("ascii maze must be rectangular")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_indexing() {
        let mut maze = Maze::filled_with_walls(5, 7);
        let coord = Coord::new(2, 3);
        maze.set(Cell::passage(coord, Surface::Coin));
        assert_eq!(maze[coord], Cell::passage(coord, Surface::Coin));
        assert_eq!(maze.height(), 5);
        assert_eq!(maze.width(), 7);
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::filled_with_walls(5, 5);
        assert!(!maze.is_in_bounds(Coord::new(5, 5)));
        assert!(!maze.is_in_bounds(Coord::new(0, 5)));
        assert!(!maze.is_in_bounds(Coord::new(5, 0)));
        assert!(maze.is_in_bounds(Coord::new(4, 4)));
        assert!(maze.cell(Coord::new(7, 0)).is_none());
        assert!(!maze.is_passage(Coord::new(7, 0)));
    }

    #[test]
    fn test_neighbors_at() {
        let maze = Maze::filled_with_walls(7, 7);
        let neighbors = maze.neighbors_at(Coord::new(3, 3), 2).collect::<Vec<_>>();
        assert_eq!(
            neighbors,
            vec![
                Coord::new(1, 3),
                Coord::new(5, 3),
                Coord::new(3, 1),
                Coord::new(3, 5)
            ]
        );
        // Corner cells lose the neighbors that would fall off the grid
        let corner = maze.neighbors_at(Coord::new(1, 1), 2).collect::<Vec<_>>();
        assert_eq!(corner, vec![Coord::new(3, 1), Coord::new(1, 3)]);
    }

    #[test]
    fn test_passage_neighbors() {
        let maze = maze_from_ascii(&["###", "...", "#.#"]);
        let neighbors = maze.passage_neighbors(Coord::new(1, 1)).collect::<Vec<_>>();
        assert_eq!(
            neighbors,
            vec![Coord::new(2, 1), Coord::new(1, 0), Coord::new(1, 2)]
        );
    }

    #[test]
    fn test_from_rows_rejects_bad_layouts() {
        assert_eq!(Maze::from_rows(vec![]), Err(MazeError::Empty));

        let ragged = vec![
            vec![Cell::wall(Coord::new(0, 0)), Cell::wall(Coord::new(0, 1))],
            vec![Cell::wall(Coord::new(1, 0))],
        ];
        assert_eq!(
            Maze::from_rows(ragged),
            Err(MazeError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );

        let misplaced = vec![vec![Cell::wall(Coord::new(3, 3))]];
        assert_eq!(
            Maze::from_rows(misplaced),
            Err(MazeError::MisplacedCell {
                slot: Coord::new(0, 0),
                recorded: Coord::new(3, 3)
            })
        );
    }

    #[test]
    fn test_odd_dimension() {
        assert_eq!(odd_dimension(1), 1);
        assert_eq!(odd_dimension(4), 5);
        assert_eq!(odd_dimension(7), 7);
    }
}
