// src/simulation/config.rs

use crate::error::{GenerationError, Result};
use crate::generator::{AgentParams, CellularParams, Pass};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything a simulation run needs. Missing JSON fields fall back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
    pub iterations: usize,
    /// Fixed seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Chance of each cell starting occupied.
    pub initial_fill: f64,
    /// Agent start as `[row, column]`. Defaults to the grid centre.
    pub agent_start: Option<(i32, i32)>,
    /// Passes run, in order, on every iteration.
    pub schedule: Vec<Pass>,
    pub cellular: CellularParams,
    pub agent: AgentParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 10,
            iterations: 5,
            seed: None,
            initial_fill: 0.0,
            agent_start: None,
            schedule: vec![Pass::Cellular, Pass::Agent],
            cellular: CellularParams::default(),
            agent: AgentParams::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Rejects configurations the generators cannot run on.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.width.checked_mul(self.height).is_none() {
            return Err(GenerationError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.initial_fill.is_finite() || self.initial_fill < 0.0 {
            return Err(GenerationError::InvalidProbability {
                name: "initial_fill",
                value: self.initial_fill,
            });
        }
        if let Some((x, y)) = self.agent_start {
            let inside = x >= 0 && y >= 0 && (x as usize) < self.height && (y as usize) < self.width;
            if !inside {
                return Err(GenerationError::AgentOutOfBounds {
                    x,
                    y,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        self.cellular.validate()?;
        self.agent.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.width, config.height), (20, 10));
        assert_eq!(config.schedule, vec![Pass::Cellular, Pass::Agent]);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "width": 32,
            "height": 16,
            "seed": 7,
            "agent_start": [3, 4],
            "schedule": ["agent", "agent", "cellular"],
            "cellular": { "radius": 2, "threshold": 0.45 },
            "agent": { "walks": 3 }
        }"#;
        let config = SimulationConfig::from_json_str(json).unwrap();
        assert_eq!(config.width, 32);
        assert_eq!(config.height, 16);
        assert_eq!(config.iterations, 5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.agent_start, Some((3, 4)));
        assert_eq!(config.schedule, vec![Pass::Agent, Pass::Agent, Pass::Cellular]);
        assert_eq!(config.cellular.radius, 2);
        assert_approx_eq!(config.cellular.threshold, 0.45);
        assert_eq!(config.agent.walks, 3);
        assert_eq!(config.agent.steps_per_walk, 10);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let err = SimulationConfig::from_json_str(r#"{ "width": 0 }"#).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidDimensions { width: 0, .. }));
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let json = format!(r#"{{ "width": {}, "height": 4 }}"#, usize::MAX / 2);
        let err = SimulationConfig::from_json_str(&json).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidDimensions { height: 4, .. }));
    }

    #[test]
    fn test_oversized_radius_rejected() {
        let err =
            SimulationConfig::from_json_str(r#"{ "cellular": { "radius": 4294967296 } }"#).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidRadius { radius: 4294967296 }));
    }

    #[test]
    fn test_agent_start_outside_rejected() {
        let err = SimulationConfig::from_json_str(r#"{ "agent_start": [10, 0] }"#).unwrap_err();
        assert!(matches!(err, GenerationError::AgentOutOfBounds { x: 10, .. }));
    }

    #[test]
    fn test_malformed_json_reported() {
        let err = SimulationConfig::from_json_str("{ width: ").unwrap_err();
        assert!(matches!(err, GenerationError::Config(_)));
    }

    #[test]
    fn test_missing_file_reported() {
        let err = SimulationConfig::from_json_file("/nonexistent/rule_pcg.json").unwrap_err();
        assert!(matches!(err, GenerationError::Io(_)));
    }
}
