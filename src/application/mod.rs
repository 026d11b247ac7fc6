mod config;
mod controller;

pub use config::{ConfigError, SimulationConfig, parse_number};
pub use controller::Controller;
