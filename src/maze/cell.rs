use rand::Rng;
use std::fmt;

/// Position of a cell in the maze grid, `row` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Coordinate halfway between two cells on the same row or column.
    pub fn midpoint(self, other: Coord) -> Coord {
        Coord {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Wall,
    Passage,
}

/// Terrain of a passage cell. Determines what it costs to step onto it.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    #[default]
    Normal,
    Swamp,
    Sand,
    Coin,
    GoodFloor,
}

impl Surface {
    pub const SWAMP_PROBABILITY: f64 = 0.02;
    pub const SAND_PROBABILITY: f64 = 0.03;
    pub const COIN_PROBABILITY: f64 = 0.02;
    pub const GOOD_FLOOR_PROBABILITY: f64 = 0.02;

    pub const NORMAL_COST: u32 = 1;
    pub const SWAMP_COST: u32 = 5;
    pub const SAND_COST: u32 = 3;
    pub const COIN_COST: u32 = 0;
    pub const GOOD_FLOOR_COST: u32 = 2;

    /// Every surface, in legend order
    pub const ALL: [Surface; 5] = [
        Surface::Swamp,
        Surface::Sand,
        Surface::Coin,
        Surface::GoodFloor,
        Surface::Normal,
    ];

    /// Draws a surface for a freshly carved passage.
    /// Consumes exactly one uniform sample from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Surface {
        Surface::from_sample(rng.random::<f64>())
    }

    /// Maps a uniform sample in [0, 1) onto a surface using cumulative thresholds,
    /// checked in the order swamp, sand, coin, good floor.
    pub fn from_sample(chance: f64) -> Surface {
        let mut threshold = 0.0;
        for (surface, probability) in [
            (Surface::Swamp, Surface::SWAMP_PROBABILITY),
            (Surface::Sand, Surface::SAND_PROBABILITY),
            (Surface::Coin, Surface::COIN_PROBABILITY),
            (Surface::GoodFloor, Surface::GOOD_FLOOR_PROBABILITY),
        ] {
            threshold += probability;
            if chance < threshold {
                return surface;
            }
        }
        Surface::Normal
    }

    /// Cost of entering a cell with this surface.
    pub fn cost(self) -> u32 {
        match self {
            Surface::Normal => Surface::NORMAL_COST,
            Surface::Swamp => Surface::SWAMP_COST,
            Surface::Sand => Surface::SAND_COST,
            Surface::Coin => Surface::COIN_COST,
            Surface::GoodFloor => Surface::GOOD_FLOOR_COST,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Surface::Normal => "Passage",
            Surface::Swamp => "Swamp",
            Surface::Sand => "Sand",
            Surface::Coin => "Coin",
            Surface::GoodFloor => "Good floor",
        }
    }
}

/// A single slot of the maze grid.
/// Cells are replaced wholesale when the grid changes, never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    pub kind: CellType,
    /// Only meaningful for passages; walls always carry `Surface::Normal`.
    pub surface: Surface,
}

impl Cell {
    pub fn wall(coord: Coord) -> Self {
        Cell {
            coord,
            kind: CellType::Wall,
            surface: Surface::Normal,
        }
    }

    pub fn passage(coord: Coord, surface: Surface) -> Self {
        Cell {
            coord,
            kind: CellType::Passage,
            surface,
        }
    }

    pub fn is_passage(&self) -> bool {
        self.kind == CellType::Passage
    }

    pub fn is_wall(&self) -> bool {
        self.kind == CellType::Wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_surface_costs() {
        assert_eq!(Surface::Normal.cost(), 1);
        assert_eq!(Surface::Swamp.cost(), 5);
        assert_eq!(Surface::Sand.cost(), 3);
        assert_eq!(Surface::Coin.cost(), 0);
        assert_eq!(Surface::GoodFloor.cost(), 2);
    }

    #[test]
    fn test_surface_thresholds() {
        assert_eq!(Surface::from_sample(0.0), Surface::Swamp);
        assert_eq!(Surface::from_sample(0.019), Surface::Swamp);
        assert_eq!(Surface::from_sample(0.021), Surface::Sand);
        assert_eq!(Surface::from_sample(0.049), Surface::Sand);
        assert_eq!(Surface::from_sample(0.051), Surface::Coin);
        assert_eq!(Surface::from_sample(0.069), Surface::Coin);
        assert_eq!(Surface::from_sample(0.071), Surface::GoodFloor);
        assert_eq!(Surface::from_sample(0.089), Surface::GoodFloor);
        assert_eq!(Surface::from_sample(0.091), Surface::Normal);
        assert_eq!(Surface::from_sample(0.999), Surface::Normal);
    }

    #[test]
    fn test_random_surface_is_mostly_normal() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws = 10_000;
        let normal = (0..draws)
            .filter(|_| Surface::random(&mut rng) == Surface::Normal)
            .count();
        // Expected 91%, allow generous slack
        assert!(normal > draws * 85 / 100 && normal < draws * 97 / 100);
    }

    #[test]
    fn test_wall_defaults_to_normal_surface() {
        let cell = Cell::wall(Coord::new(0, 0));
        assert!(cell.is_wall());
        assert_eq!(cell.surface, Surface::Normal);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(Coord::new(1, 1).midpoint(Coord::new(1, 3)), Coord::new(1, 2));
        assert_eq!(Coord::new(3, 5).midpoint(Coord::new(1, 5)), Coord::new(2, 5));
    }
}
