// grid.rs - Grid type for Conway's Game of Life

use std::fmt;

use crate::error::GridError;

/// The Moore neighbourhood: every cell touching (row, col) by edge or corner.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// A fixed-size, row-major matrix of cells holding 0 (dead) or 1 (alive).
///
/// Dimensions are set at construction and never change. Neighbours that
/// fall off the edge count as dead; there is no wraparound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// All-dead grid of the given size.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self { rows, cols, cells: vec![0; rows * cols] }
    }

    /// Builds a grid from explicit rows of 0/1 values.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).ok_or(GridError::Empty)?;
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::RaggedRows { row, expected: cols, found: values.len() });
            }
            for (col, &value) in values.iter().enumerate() {
                if value > 1 {
                    return Err(GridError::InvalidCell { row, col, value: char::from(b'0' + value.min(9)) });
                }
                cells.push(value);
            }
        }

        Ok(Self { rows: rows.len(), cols, cells })
    }

    /// Parses a picture of the grid, one line per row.
    ///
    /// `#` or `1` is alive, `.` or `0` is dead. Lines are trimmed and blank
    /// lines skipped, so indented raw strings work.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (row, line) in text.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let values = line
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    '#' | '1' => Ok(1),
                    '.' | '0' => Ok(0),
                    value     => Err(GridError::InvalidCell { row, col, value }),
                })
                .collect::<Result<Vec<u8>, _>>()?;
            rows.push(values);
        }
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        self.index(row, col).ok_or(GridError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Cell value at (row, col), or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(1)
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let i = self.checked_index(row, col)?;
        self.cells[i] = u8::from(alive);
        Ok(())
    }

    /// Flips one cell in place and returns its new value.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<u8, GridError> {
        let i = self.checked_index(row, col)?;
        self.cells[i] ^= 1;
        Ok(self.cells[i])
    }

    /// Kills every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Number of live cells.
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == 1)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    fn neighbor_positions(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let nr = row.checked_add_signed(dr)?;
            let nc = col.checked_add_signed(dc)?;
            (nr < self.rows && nc < self.cols).then_some((nr, nc))
        })
    }

    /// Sum of the in-bounds Moore neighbours of (row, col).
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        self.neighbor_positions(row, col)
            .map(|(nr, nc)| self.cells[nr * self.cols + nc])
            .sum()
    }

    /// How many neighbour positions of (row, col) lie inside the grid.
    pub fn possible_neighbors(&self, row: usize, col: usize) -> usize {
        self.neighbor_positions(row, col).count()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    pub(crate) fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            for &cell in row {
                f.write_str(if cell == 1 { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
