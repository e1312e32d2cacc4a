// seed.rs - Random starting grids

use rand::Rng;

use crate::grid::Grid;

/// Grid where each cell is independently alive when a uniform draw in
/// [0, 1) exceeds `threshold`.
pub fn random_grid<R: Rng + ?Sized>(rows: usize, cols: usize, threshold: f64, rng: &mut R) -> Grid {
    let mut grid = Grid::empty(rows, cols);
    for cell in grid.cells_mut() {
        *cell = u8::from(rng.random::<f64>() > threshold);
    }
    grid
}
