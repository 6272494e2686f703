use crossterm::style::{Color, Stylize};

use std::{collections::HashSet, fmt, fmt::Write};

use crate::maze::{Cell, Coord, Maze, Surface};

/// What a single maze slot is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Wall,
    Floor(Surface),
    Start,
    End,
    Route,
}

impl Glyph {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: usize = 3;

    fn for_cell(cell: &Cell) -> Glyph {
        if cell.is_wall() {
            Glyph::Wall
        } else {
            Glyph::Floor(cell.surface)
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Glyph::Start => " S ".with(Color::Black).on(Color::Red),
            Glyph::End => " E ".with(Color::Black).on(Color::Red),
            Glyph::Route => " . ".with(Color::Reset).on(Color::Magenta),
            Glyph::Wall => "   ".with(Color::Reset).on(Color::Black),
            Glyph::Floor(surface) => match surface {
                Surface::Swamp => " ~ ".with(Color::Black).on(Color::Green),
                Surface::Sand => "   ".with(Color::Reset).on(Color::Yellow),
                Surface::Coin => " $ ".with(Color::Yellow).on(Color::White),
                Surface::GoodFloor => "   ".with(Color::Reset).on(Color::Cyan),
                Surface::Normal => "   ".with(Color::Reset).on(Color::White),
            },
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Glyph::CELL_WIDTH,
                "Each cell must occupy exactly three character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Draws the maze with row and column numbers, optionally overlaying a path.
///
/// The first path cell is drawn as `S`, the last as `E` and everything in
/// between as a dot. Output depends only on the arguments.
pub fn render_maze(maze: &Maze, path: Option<&[Coord]>) -> String {
    let path = path.unwrap_or_default();
    let on_path = path.iter().copied().collect::<HashSet<_>>();
    let first = path.first().copied();
    let last = path.last().copied();

    let mut out = String::from("    ");
    // Writing into a String cannot fail
    for col in 0..maze.width() {
        write!(out, "{:2} ", col).ok();
    }
    out.push('\n');

    for row in 0..maze.height() {
        write!(out, "{:2} ", row).ok();
        for col in 0..maze.width() {
            let coord = Coord::new(row, col);
            let glyph = if Some(coord) == first {
                Glyph::Start
            } else if Some(coord) == last {
                Glyph::End
            } else if on_path.contains(&coord) {
                Glyph::Route
            } else {
                Glyph::for_cell(&maze[coord])
            };
            write!(out, "{}", glyph).ok();
        }
        out.push('\n');
    }
    out
}

/// Key for the floor glyphs, including what each surface costs to enter.
pub fn legend() -> String {
    let mut out = String::new();
    for surface in Surface::ALL {
        writeln!(
            out,
            "{}: {} (cost {})",
            Glyph::Floor(surface),
            surface.name(),
            surface.cost()
        )
        .ok();
    }
    writeln!(out, "{}: Wall", Glyph::Wall).ok();
    out
}
