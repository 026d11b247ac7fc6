// Domain layer - Grid, transition rule, seed patterns, simulation
pub mod domain;

// Application layer - Configuration and playback control
pub mod application;

// Re-exports for convenience
pub use domain::{Grid, LifeError, Pattern, Simulation};
pub use application::{ConfigError, Controller, SimulationConfig};
