//! Headless runner: `toroidal_life [SIZE] [PATTERN] [GENERATIONS] [SEED]`
//!
//! Prints one status line per generation. Set `RUST_LOG=debug` for timings.

use std::error::Error;
use toroidal_life::{
    Controller, SimulationConfig,
    application::parse_number,
};

const DEFAULT_GENERATIONS: u64 = 100;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // GENERATIONS sits between PATTERN and SEED on the command line
    let args: Vec<String> = std::env::args().skip(1).collect();
    let generations = match args.get(2) {
        Some(value) => parse_number("generations", value)?,
        None => DEFAULT_GENERATIONS,
    };
    let config_args = args.iter().take(2).chain(args.iter().skip(3));
    let config = SimulationConfig::from_args(config_args)?;

    let mut controller = Controller::new(config)?;
    println!("{}", controller.status_line());

    for _ in 0..generations {
        controller.step_once();
        println!("{}", controller.status_line());

        if controller.live_cell_count() == 0 {
            log::info!("Population died out at generation {}", controller.generation());
            break;
        }
    }

    Ok(())
}
