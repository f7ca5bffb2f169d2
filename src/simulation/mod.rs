// src/simulation/mod.rs

//! # Simulation Driver
//!
//! Owns the grid, the agent position and the random source, and runs the
//! configured schedule of generator passes once per iteration, feeding each
//! pass's output grid into the next.

pub mod config;

pub use config::SimulationConfig;

use crate::error::Result;
use crate::generator::{cellular_automata_step, drunk_agent_walk, Pass};
use crate::map::{AgentState, Grid};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Per-iteration summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IterationStats {
    pub iteration: usize,
    pub occupied: usize,
    pub rooms: usize,
    pub wall_bounces: usize,
}

pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    agent: AgentState,
    rng: StdRng,
    iteration: usize,
    history: Vec<IterationStats>,
}

impl Simulation {
    /// Validates `config` and builds the initial grid and agent.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut grid = Grid::new(config.width, config.height)?;
        grid.scatter(config.initial_fill, &mut rng);

        let agent = match config.agent_start {
            Some((x, y)) => AgentState::new(x, y),
            None => AgentState::centered(config.width, config.height),
        };

        info!(
            "Simulation ready: {}x{} grid, {} iterations, schedule {:?}, seed {:?}",
            config.height, config.width, config.iterations, config.schedule, config.seed
        );

        Ok(Self {
            config,
            grid,
            agent,
            rng,
            iteration: 0,
            history: Vec::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agent(&self) -> AgentState {
        self.agent
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Iterations completed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn history(&self) -> &[IterationStats] {
        &self.history
    }

    pub fn is_finished(&self) -> bool {
        self.iteration >= self.config.iterations
    }

    /// Runs every scheduled pass once.
    pub fn step(&mut self) -> IterationStats {
        self.iteration += 1;
        let mut stats = IterationStats {
            iteration: self.iteration,
            ..IterationStats::default()
        };

        for pass in &self.config.schedule {
            debug!("iteration {}: {}", self.iteration, pass.name());
            match pass {
                Pass::Cellular => {
                    self.grid = cellular_automata_step(&self.grid, &self.config.cellular);
                }
                Pass::Agent => {
                    let outcome =
                        drunk_agent_walk(&self.grid, &self.config.agent, self.agent, &mut self.rng);
                    self.grid = outcome.grid;
                    self.agent = outcome.agent;
                    stats.rooms += outcome.stats.rooms;
                    stats.wall_bounces += outcome.stats.wall_bounces;
                }
            }
        }

        stats.occupied = self.grid.occupied_count();
        info!(
            "Iteration {}: {} occupied, {} rooms, agent at ({}, {})",
            stats.iteration, stats.occupied, stats.rooms, self.agent.x, self.agent.y
        );
        self.history.push(stats);
        stats
    }

    /// Runs the remaining iterations.
    pub fn run(&mut self) -> &Grid {
        self.run_with(|_, _| {})
    }

    /// Runs the remaining iterations, handing the grid to `observer` after
    /// each one.
    pub fn run_with<F>(&mut self, mut observer: F) -> &Grid
    where
        F: FnMut(&IterationStats, &Grid),
    {
        while !self.is_finished() {
            let stats = self.step();
            observer(&stats, &self.grid);
        }
        info!("Simulation finished after {} iterations", self.iteration);
        &self.grid
    }
}
