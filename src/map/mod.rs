// src/map/mod.rs
pub mod agent;
pub mod grid;

pub use agent::{AgentState, Heading};
pub use grid::{Cell, Grid};
