//! # rule_pcg Entry Point
//!
//! Console driver for the cellular automata + drunk agent generator. Loads an
//! optional JSON configuration, runs the configured number of iterations and
//! prints the map after each one.
//!
//! ```text
//! rule_pcg [CONFIG.json] [--style digits|glyphs]
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.
//!
//! ## License
//! Licensed under the MIT License.

use clap::Parser;
use log::info;
use rule_pcg::simulation::{Simulation, SimulationConfig};
use rule_pcg::utils::render::{render, RenderStyle};
use std::error::Error;
use std::path::PathBuf;

/// Cellular automata + drunk agent map generator.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON simulation config. Built-in defaults are used when omitted.
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,
    /// How the map is printed after each iteration.
    #[arg(long, value_enum, value_name = "STYLE", default_value_t = RenderStyle::Digits)]
    style: RenderStyle,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("rule_pcg starting...");

    let args = Cli::parse();
    let config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            SimulationConfig::from_json_file(path)?
        }
        None => SimulationConfig::default(),
    };

    println!("--- CELLULAR AUTOMATA AND DRUNK AGENT SIMULATION ---");
    let mut simulation = Simulation::new(config)?;

    println!("\nInitial map state:");
    print!("{}", render(simulation.grid(), args.style));

    let style = args.style;
    simulation.run_with(|stats, grid| {
        println!("\n--- Iteration {} ---", stats.iteration);
        print!("{}", render(grid, style));
    });

    println!("\n--- Simulation Finished ---");
    info!("rule_pcg exiting.");
    Ok(())
}
