use super::cell::{Cell, Coord};

/// Row-major storage for the cells of a maze.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates a grid where every slot is a wall.
    pub fn walls(width: usize, height: usize) -> Self {
        let data = (0..height)
            .flat_map(|row| (0..width).map(move |col| Cell::wall(Coord::new(row, col))))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Wraps already laid-out cells. `data.len()` must equal `width * height`.
    pub(super) fn from_cells(width: usize, height: usize, data: Vec<Cell>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Grid {
            data: data.into_boxed_slice(),
            width,
            height,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cells(&self) -> &[Cell] {
        &self.data
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    pub fn ravel_index(&self, coord: Coord) -> usize {
        coord.row * self.width + coord.col
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.contains(coord)
            .then(|| &self.data[self.ravel_index(coord)])
    }

    /// Replaces the slot at `cell.coord` with `cell`.
    pub fn set(&mut self, cell: Cell) {
        let idx = self.ravel_index(cell.coord);
        self.data[idx] = cell;
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}
