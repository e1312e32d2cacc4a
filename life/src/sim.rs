// sim.rs - Simulation state: the grid plus its generation counter

use rand::Rng;
use tracing::{debug, info};

use crate::config::LifeConfig;
use crate::error::{ConfigError, GridError};
use crate::grid::Grid;
use crate::seed;

/// Single owner of the grid. Every command replaces or mutates it here.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: LifeConfig,
    grid: Grid,
    scratch: Grid,
    generation: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        let config = LifeConfig::default();
        Self {
            grid: Grid::empty(config.rows, config.cols),
            scratch: Grid::empty(config.rows, config.cols),
            config,
            generation: 0,
        }
    }
}

impl Simulation {
    /// Starts from an all-dead grid of the configured size.
    pub fn new(config: LifeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            grid: Grid::empty(config.rows, config.cols),
            scratch: Grid::empty(config.rows, config.cols),
            config,
            generation: 0,
        })
    }

    /// Starts from `grid`; its dimensions override the configured ones.
    pub fn with_grid(config: LifeConfig, grid: Grid) -> Result<Self, ConfigError> {
        let config = config.with_size(grid.rows(), grid.cols());
        config.validate()?;
        let scratch = Grid::empty(grid.rows(), grid.cols());
        Ok(Self { config, grid, scratch, generation: 0 })
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.live_cells()
    }

    /// Replaces the grid with its next generation, reusing the scratch buffer.
    pub fn step(&mut self) {
        self.grid.step_in_place(&mut self.scratch);
        self.generation += 1;
        debug!(generation = self.generation, population = self.population(), "step");
    }

    /// Reseeds every cell from the thread-local generator.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let LifeConfig { rows, cols, seed_threshold, .. } = self.config;
        self.grid = seed::random_grid(rows, cols, seed_threshold, rng);
        self.generation = 0;
        info!(population = self.population(), "seeded grid");
    }

    /// Kills every cell. Whether the loop is running is not touched.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        info!("cleared grid");
    }

    /// Flips a single cell and returns its new value.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<u8, GridError> {
        let value = self.grid.toggle(row, col)?;
        debug!(row, col, value, "toggled cell");
        Ok(value)
    }
}
