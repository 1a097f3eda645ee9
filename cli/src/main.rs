//! Pattern simulator entry point
//!
//! Runs the extreme-value simulation with the compiled-in reference
//! configuration, or with a JSON configuration file given as the sole
//! argument. Progress messages go to stderr; the process exits 0 on
//! completion.

use pattern_simulator_core_rs::{Simulation, SimulationConfig};
use std::process::ExitCode;

fn load_config(path: &str) -> Result<SimulationConfig, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path, e))?;
    serde_json::from_str(&contents).map_err(|e| format!("cannot parse {}: {}", path, e))
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(message) => {
                eprintln!("error: {}", message);
                return ExitCode::FAILURE;
            }
        },
        None => SimulationConfig::default(),
    };

    if args.next().is_some() {
        eprintln!("usage: pattern-sim [config.json]");
        return ExitCode::FAILURE;
    }

    let simulation = match Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(error) => {
            eprintln!("error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    eprintln!(
        "Starting calculation with {} rounds on {} worker(s)",
        simulation.config().rounds,
        simulation.config().workers
    );

    let max_hits = simulation.run_parallel();

    eprintln!("Found at max {} hits", max_hits);
    ExitCode::SUCCESS
}
