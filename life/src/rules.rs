// rules.rs - Conway's transition rule and the generation step

use crate::grid::Grid;

/// Next value of a cell holding `current` with `neighbors` live neighbours.
pub fn next_state(current: u8, neighbors: u8) -> u8 {
    match (current, neighbors) {
        (_, n) if n < 2 || n > 3 => 0,  // Under- or overpopulation
        (0, 3)                   => 1,  // Birth
        (c, _)                   => c,  // Survival, or stays dead
    }
}

/// Computes the next generation into a freshly allocated grid.
///
/// Only `grid` is read and only the result is written, so every cell sees
/// the same generation of neighbours.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::empty(grid.rows(), grid.cols());
    step_into(grid, &mut next);
    next
}

fn step_into(current: &Grid, next: &mut Grid) {
    let cols = current.cols();
    let cells = current.cells();
    for (i, out) in next.cells_mut().iter_mut().enumerate() {
        let (row, col) = (i / cols, i % cols);
        *out = next_state(cells[i], current.live_neighbors(row, col));
    }
}

impl Grid {
    /// Double-buffered step: computes into `scratch`, then swaps it in.
    ///
    /// `scratch` is resized when its dimensions differ and afterwards holds
    /// the previous generation.
    pub fn step_in_place(&mut self, scratch: &mut Grid) {
        if scratch.rows() != self.rows() || scratch.cols() != self.cols() {
            *scratch = Grid::empty(self.rows(), self.cols());
        }
        step_into(self, scratch);
        std::mem::swap(self, scratch);
    }
}
