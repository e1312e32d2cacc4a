// error.rs - Error types for grid construction and configuration

/// Errors raised when building or addressing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) holds {value:?}, expected 0/1 or '.'/'#'")]
    InvalidCell { row: usize, col: usize, value: char },

    #[error("grid has no cells")]
    Empty,
}

/// Errors raised by [`LifeConfig::validate`](crate::LifeConfig::validate).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },

    #[error("step interval must be non-zero")]
    ZeroInterval,

    #[error("seed threshold must lie in [0, 1], got {0}")]
    Threshold(f64),
}
