use super::{LifeError, rules};
use rayon::prelude::*;

/// Grid is a fixed-size boolean cell field on a torus.
/// Every coordinate wraps around both axes, so the grid has no edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0 && len <= isize::MAX as usize)
            .ok_or(LifeError::InvalidDimension { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Map arbitrary signed coordinates onto the torus.
    /// Uses euclidean remainder: -1 maps to width - 1, never to -1.
    const fn wrap(&self, x: i64, y: i64) -> usize {
        let wx = x.rem_euclid(self.width as i64) as usize;
        let wy = y.rem_euclid(self.height as i64) as usize;
        wy * self.width + wx
    }

    /// Set a cell, wrapping out-of-range coordinates
    pub fn set(&mut self, x: i64, y: i64, alive: bool) {
        let idx = self.wrap(x, y);
        self.cells[idx] = alive;
    }

    /// Check whether a cell is alive, wrapping out-of-range coordinates
    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.cells[self.wrap(x, y)]
    }

    /// Count live cells in the 8-neighborhood (cell itself excluded)
    pub fn live_neighbors(&self, x: i64, y: i64) -> u8 {
        let mut count = 0u8;

        for dy in -1..=1 {
            for dx in -1..=1 {
                if (dx != 0 || dy != 0) && self.is_alive(x + dx, y + dy) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Count total alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Iterate over in-range coordinates of live cells, row by row
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(idx, _)| (idx % width, idx / width))
    }

    /// Overwrite this grid with the generation that follows `source`.
    /// Reads only from `source`, so no cell sees a half-updated neighborhood.
    pub fn evolve_from(&mut self, source: &Grid) {
        debug_assert_eq!(self.dimensions(), source.dimensions());

        self.cells
            .chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| source.evolve_row(y, row));
    }

    /// Parallel version of [`Grid::evolve_from`], one rayon task per row.
    /// Produces exactly the same cells as the serial version.
    pub fn evolve_from_parallel(&mut self, source: &Grid) {
        debug_assert_eq!(self.dimensions(), source.dimensions());

        self.cells
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| source.evolve_row(y, row));
    }

    /// Fill `row` with the next states of row `y` of this grid
    fn evolve_row(&self, y: usize, row: &mut [bool]) {
        let y = y as i64;
        for (x, cell) in row.iter_mut().enumerate() {
            let x = x as i64;
            *cell = rules::next_state(self.is_alive(x, y), self.live_neighbors(x, y));
        }
    }
}
