// src/generator/mod.rs
pub mod cellular;
pub mod config;
pub mod drunk_agent;

pub use cellular::cellular_automata_step;
pub use config::{AgentParams, CellularParams};
pub use drunk_agent::{drunk_agent_walk, WalkOutcome, WalkStats};

/// The two generator passes a simulation can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pass {
    Cellular,
    Agent,
}

impl Pass {
    /// Returns a user-friendly name for the pass.
    pub fn name(&self) -> &'static str {
        match self {
            Pass::Cellular => "Cellular Automata",
            Pass::Agent => "Drunk Agent",
        }
    }
}
