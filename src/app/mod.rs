mod prompt;

use std::io::{BufRead, Write};

use thiserror::Error;

pub use prompt::Prompter;

use crate::{
    config::{Config, ConfigError},
    generators::{Generator, get_rng},
    render::{legend, render_maze},
    solvers::{SolveError, Solver, path_cost},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input ended before all answers were given")]
    InputClosed,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not solve the maze: {0}")]
    Solve(#[from] SolveError),
    #[error("failed to set up logging: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Everything the user picks before a maze is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    pub height: usize,
    pub width: usize,
    pub generator: Generator,
    pub solver: Solver,
}

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// One interactive session: ask for parameters, draw the maze, ask for two
    /// cells and draw the path between them.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<(), AppError> {
        let mut prompter = Prompter::new(input, output);

        let params = prompter.ask_parameters()?;
        tracing::info!(
            "Generating {}x{} maze with {} (seed: {:?})",
            params.height,
            params.width,
            params.generator,
            self.config.seed
        );
        let mut rng = get_rng(self.config.seed);
        let maze = params.generator.generate(params.height, params.width, &mut rng);

        prompter.write_line("Generated maze:")?;
        prompter.write_line(render_maze(&maze, None))?;
        prompter.write_line(legend())?;

        let start = prompter.ask_coord(&maze, "start")?;
        let end = prompter.ask_coord(&maze, "end")?;

        tracing::info!("Solving from {} to {} with {}", start, end, params.solver);
        let path = params.solver.solve(&maze, start, end)?;
        if path.is_empty() {
            tracing::info!("No path between {} and {}", start, end);
            prompter.write_line("No path found.")?;
            return Ok(());
        }

        let steps = path.len() - 1;
        let cost = path_cost(&maze, &path);
        tracing::info!("Path found: {} steps, total cost {}", steps, cost);
        prompter.write_line(render_maze(&maze, Some(&path)))?;
        prompter.write_line(format!("Path length: {} steps, total cost: {}", steps, cost))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str, seed: u64) -> Result<String, AppError> {
        let app = App::new(Config {
            seed: Some(seed),
            ..Config::default()
        });
        let mut output = Vec::new();
        app.run(Cursor::new(input.as_bytes().to_vec()), &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_full_session_finds_path() {
        // 5x5 maze, Prim, BFS, corner to corner
        let out = run_session("5\n5\n1\n1\n1\n1\n3\n3\n", 3).unwrap();
        assert!(out.contains("Generated maze:"));
        assert!(out.contains("Swamp (cost 5)"));
        assert!(out.contains("Path length:"));
        assert!(!out.contains("No path found."));
    }

    #[test]
    fn test_same_seed_same_session() {
        let input = "9\n11\n2\n2\n1\n1\n7\n9\n";
        assert_eq!(run_session(input, 8).unwrap(), run_session(input, 8).unwrap());
    }

    #[test]
    fn test_session_stops_when_input_ends() {
        let result = run_session("5\n5\n", 0);
        assert!(matches!(result, Err(AppError::InputClosed)));
    }
}
