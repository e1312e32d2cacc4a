// lib.rs - Conway's Game of Life: grid, rules and the timer-driven run loop

pub mod config;
pub mod error;
pub mod grid;
pub mod rules;
pub mod run_loop;
pub mod seed;
pub mod sim;

pub use config::LifeConfig;
pub use error::{ConfigError, GridError};
pub use grid::Grid;
pub use rules::step;
pub use run_loop::{OnStep, RunFlag, Runner, SharedSimulation};
pub use sim::Simulation;
