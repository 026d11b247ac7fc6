//! Double-buffered Life simulation.
//!
//! Two grids are allocated once. Each step writes the next generation into
//! the inactive grid and then swaps the two, so the "current" role alternates
//! between buffers without copying or reallocating cell data.

use super::{Grid, LifeError, Pattern};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::mem;

/// A square toroidal Life simulation.
#[derive(Clone, Debug)]
pub struct Simulation {
    current: Grid,
    next: Grid,
    size: usize,
}

impl Simulation {
    /// Create a `size` x `size` simulation seeded with `pattern`.
    /// The random pattern draws from the thread-local RNG.
    pub fn new(size: usize, pattern: Pattern) -> Result<Self, LifeError> {
        Self::with_rng(size, pattern, &mut rand::rng())
    }

    /// Create a simulation whose random seeding is reproducible from `seed`
    pub fn with_seed(size: usize, pattern: Pattern, seed: u64) -> Result<Self, LifeError> {
        Self::with_rng(size, pattern, &mut StdRng::seed_from_u64(seed))
    }

    /// Create a simulation drawing random seeding from `rng`
    pub fn with_rng<R: Rng>(size: usize, pattern: Pattern, rng: &mut R) -> Result<Self, LifeError> {
        let mut current = Grid::new(size, size)?;
        let next = Grid::new(size, size)?;
        pattern.seed(&mut current, rng);

        log::debug!(
            "Seeded {}x{} simulation with {} ({} live cells)",
            size, size, pattern.name(), current.count_alive()
        );

        Ok(Self { current, next, size })
    }

    /// Side length of the square grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Advance one generation on the calling thread
    pub fn step(&mut self) {
        self.next.evolve_from(&self.current);
        mem::swap(&mut self.current, &mut self.next);
    }

    /// Advance one generation, computing rows in parallel with rayon.
    /// The result is identical to [`Simulation::step`].
    pub fn step_parallel(&mut self) {
        self.next.evolve_from_parallel(&self.current);
        mem::swap(&mut self.current, &mut self.next);
    }

    /// Check whether a cell of the current generation is alive.
    /// Coordinates wrap around the torus.
    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.current.is_alive(x, y)
    }

    /// Number of live cells in the current generation
    pub fn live_cell_count(&self) -> usize {
        self.current.count_alive()
    }

    /// Coordinates of every live cell in the current generation
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.current.live_cells()
    }

    /// Read-only view of the current generation
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Reseed with `pattern`, reusing both buffers
    pub fn reset(&mut self, pattern: Pattern) {
        self.reset_with_rng(pattern, &mut rand::rng());
    }

    /// Reseed with `pattern`, drawing random seeding from `rng`
    pub fn reset_with_rng<R: Rng>(&mut self, pattern: Pattern, rng: &mut R) {
        self.current.clear();
        self.next.clear();
        pattern.seed(&mut self.current, rng);

        log::debug!(
            "Reset {}x{} simulation to {} ({} live cells)",
            self.size, self.size, pattern.name(), self.current.count_alive()
        );
    }
}
