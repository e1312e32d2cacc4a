// config.rs - Simulation parameters

use std::time::Duration;

use crate::error::ConfigError;

// Compile-time defaults
pub const ROWS: usize = 30;                                  // Grid height
pub const COLS: usize = 50;                                  // Grid width
pub const STEP_INTERVAL: Duration = Duration::from_millis(100); // Delay between steps
pub const SEED_THRESHOLD: f64 = 0.7;                         // Draws above this are live

/// Parameters fixed for the lifetime of a [`Simulation`](crate::Simulation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    pub step_interval: Duration,
    pub seed_threshold: f64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            step_interval: STEP_INTERVAL,
            seed_threshold: SEED_THRESHOLD,
        }
    }
}

impl LifeConfig {
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_step_interval(mut self, interval: Duration) -> Self {
        self.step_interval = interval;
        self
    }

    pub fn with_seed_threshold(mut self, threshold: f64) -> Self {
        self.seed_threshold = threshold;
        self
    }

    /// Checks that the grid is non-empty, the loop cannot spin and the
    /// threshold is a probability.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroDimension { rows: self.rows, cols: self.cols });
        }
        if self.step_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if !(0.0..=1.0).contains(&self.seed_threshold) {
            return Err(ConfigError::Threshold(self.seed_threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = LifeConfig::default();
        assert_eq!(config.rows, 30);
        assert_eq!(config.cols, 50);
        assert_eq!(config.step_interval, Duration::from_millis(100));
        assert_eq!(config.seed_threshold, 0.7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_dimension_rejected() {
        let config = LifeConfig::default().with_size(0, 5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDimension { rows: 0, cols: 5 })
        );
    }

    #[test]
    fn zero_interval_rejected() {
        let config = LifeConfig::default().with_step_interval(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn threshold_outside_unit_interval_rejected() {
        assert!(LifeConfig::default().with_seed_threshold(1.5).validate().is_err());
        assert!(LifeConfig::default().with_seed_threshold(-0.1).validate().is_err());
        assert!(LifeConfig::default().with_seed_threshold(f64::NAN).validate().is_err());
        assert!(LifeConfig::default().with_seed_threshold(1.0).validate().is_ok());
    }
}
