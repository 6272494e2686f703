use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use super::{AppError, Parameters};
use crate::{
    generators::Generator,
    maze::{Coord, Maze},
    solvers::Solver,
};

/// Asks the user for input over a line-based reader/writer pair,
/// re-asking until each answer is usable.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Smallest accepted maze height and width
    pub const MIN_HEIGHT: usize = 3;
    pub const MIN_WIDTH: usize = 2;

    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn write_line(&mut self, text: impl Display) -> Result<(), AppError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Reads a non-negative whole number.
    pub fn read_number(&mut self, prompt: &str) -> Result<usize, AppError> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<usize>() {
                Ok(n) => return Ok(n),
                Err(_) => self.write_line("Please enter a non-negative whole number.")?,
            }
        }
    }

    /// Returns `(height, width)`.
    pub fn ask_dimensions(&mut self) -> Result<(usize, usize), AppError> {
        let height = loop {
            let height = self.read_number("Enter maze height: ")?;
            if height >= Self::MIN_HEIGHT {
                break height;
            }
            self.write_line(format!("Height must be at least {}.", Self::MIN_HEIGHT))?;
        };
        let width = loop {
            let width = self.read_number("Enter maze width: ")?;
            if width >= Self::MIN_WIDTH {
                break width;
            }
            self.write_line(format!("Width must be at least {}.", Self::MIN_WIDTH))?;
        };
        Ok((height, width))
    }

    /// Shows a numbered menu and returns the chosen option.
    pub fn select<T: Copy + Display>(&mut self, prompt: &str, options: &[T]) -> Result<T, AppError> {
        for (i, option) in options.iter().enumerate() {
            self.write_line(format!("{}. {}", i + 1, option))?;
        }
        loop {
            let choice = self.read_number(prompt)?;
            if (1..=options.len()).contains(&choice) {
                return Ok(options[choice - 1]);
            }
            self.write_line("Please pick an item from the list.")?;
        }
    }

    /// Reads a cell that is inside `maze` and not a wall.
    pub fn ask_coord(&mut self, maze: &Maze, label: &str) -> Result<Coord, AppError> {
        loop {
            self.write_line(format!("Choose the {} cell.", label))?;
            let row = self.read_number("Row: ")?;
            let col = self.read_number("Column: ")?;
            let coord = Coord::new(row, col);
            if maze.is_passage(coord) {
                return Ok(coord);
            }
            self.write_line(format!("{} is not an open cell of the maze.", coord))?;
        }
    }

    pub fn ask_parameters(&mut self) -> Result<Parameters, AppError> {
        let (height, width) = self.ask_dimensions()?;
        let generator = self.select("Select maze generation algorithm: ", &Generator::ALL)?;
        let solver = self.select("Select maze solving algorithm: ", &Solver::ALL)?;
        Ok(Parameters {
            height,
            width,
            generator,
            solver,
        })
    }
}
