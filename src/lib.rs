pub mod app;
pub mod config;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod render;
pub mod solvers;
