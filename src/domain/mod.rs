mod error;
mod grid;
mod patterns;
pub mod rules;
mod simulation;

pub use error::LifeError;
pub use grid::Grid;
pub use patterns::Pattern;
pub use simulation::Simulation;
