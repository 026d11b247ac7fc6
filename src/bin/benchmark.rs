//! Performance benchmark comparing serial and parallel stepping

use std::time::Instant;
use toroidal_life::{Pattern, Simulation};

const SEED: u64 = 42;

fn benchmark_serial(size: usize, iterations: u32) -> Result<f64, toroidal_life::LifeError> {
    let mut sim = Simulation::with_seed(size, Pattern::Random, SEED)?;

    let start = Instant::now();
    for _ in 0..iterations {
        sim.step();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn benchmark_parallel(size: usize, iterations: u32) -> Result<f64, toroidal_life::LifeError> {
    let mut sim = Simulation::with_seed(size, Pattern::Random, SEED)?;

    let start = Instant::now();
    for _ in 0..iterations {
        sim.step_parallel();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations)?;
        let parallel_ms = benchmark_parallel(size, iterations)?;

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let cells = 2000 * 2000;
    let parallel_ms = benchmark_parallel(2000, iterations)?;
    println!(
        "Parallel:    {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );

    Ok(())
}
