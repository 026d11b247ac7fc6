use super::SimulationConfig;
use crate::domain::{LifeError, Pattern, Simulation};
use rand::{SeedableRng, rngs::StdRng};

/// Controller drives a simulation for an interactive front end.
/// Play/pause, single-stepping, reset and the frame-time accumulator live
/// here so the simulation itself never knows about frames.
pub struct Controller {
    simulation: Simulation,
    config: SimulationConfig,
    is_running: bool,
    generation: u64,
    update_timer: f32,
    last_step_time_ms: f32,
}

impl Controller {
    pub const TITLE: &'static str = "Conway's Game of Life";

    /// Build the simulation described by `config`. Starts in play mode.
    pub fn new(config: SimulationConfig) -> Result<Self, LifeError> {
        let simulation = match config.seed {
            Some(seed) => Simulation::with_seed(config.size, config.pattern, seed)?,
            None => Simulation::new(config.size, config.pattern)?,
        };

        log::info!(
            "Starting {}x{} {} simulation at {} updates/s",
            config.size, config.size, config.pattern.name(), config.updates_per_second
        );

        Ok(Self {
            simulation,
            config,
            is_running: true,
            generation: 0,
            update_timer: 0.0,
            last_step_time_ms: 0.0,
        })
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        log::debug!("{}", if self.is_running { "Resumed" } else { "Paused" });
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Advance exactly one generation, even while paused
    pub fn step_once(&mut self) {
        let start = std::time::Instant::now();
        self.simulation.step_parallel();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;

        log::trace!(
            "Generation {} computed in {:.2} ms ({} live)",
            self.generation, self.last_step_time_ms, self.simulation.live_cell_count()
        );
    }

    /// Reseed with the configured pattern and restart the generation count
    pub fn reset(&mut self) {
        self.reset_with(self.config.pattern);
    }

    /// Reseed with `pattern`, which becomes the configured pattern.
    /// With a fixed seed the random pattern replays the same initial board.
    pub fn reset_with(&mut self, pattern: Pattern) {
        self.config.pattern = pattern;
        match self.config.seed {
            Some(seed) => self.simulation.reset_with_rng(pattern, &mut StdRng::seed_from_u64(seed)),
            None => self.simulation.reset(pattern),
        }
        self.generation = 0;
        self.update_timer = 0.0;

        log::info!("Reset to {} after user request", pattern.name());
    }

    /// Adjust simulation speed
    pub fn adjust_speed(&mut self, delta: f32) {
        self.config = self
            .config
            .with_updates_per_second(self.config.updates_per_second + delta);
    }

    pub fn updates_per_second(&self) -> f32 {
        self.config.updates_per_second
    }

    /// Feed elapsed frame time. Steps once when running and the update
    /// interval has elapsed. Returns whether a generation was computed.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if !self.is_running {
            return false;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.config.updates_per_second;

        if self.update_timer >= update_interval {
            self.step_once();
            self.update_timer = 0.0;
            true
        } else {
            false
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_cell_count(&self) -> usize {
        self.simulation.live_cell_count()
    }

    pub fn last_step_time_ms(&self) -> f32 {
        self.last_step_time_ms
    }

    /// One-line status report, e.g. for a window title
    pub fn status_line(&self) -> String {
        format!(
            "{} | Steps: {} | Live Tiles: {}",
            Self::TITLE,
            self.generation,
            self.live_cell_count()
        )
    }
}
