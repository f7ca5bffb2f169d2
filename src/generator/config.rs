// src/generator/config.rs

use crate::error::{GenerationError, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// Parameters of one cellular automata pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellularParams {
    /// Half-width of the square neighbour window (1 = 3x3, 2 = 5x5).
    pub radius: usize,
    /// Minimum occupied ratio for a cell to become occupied.
    pub threshold: f64,
}

impl Default for CellularParams {
    fn default() -> Self {
        Self {
            radius: 1,
            threshold: 0.5,
        }
    }
}

impl CellularParams {
    pub fn new(radius: usize, threshold: f64) -> Self {
        Self { radius, threshold }
    }

    /// Number of cells in the neighbour window, `(2R+1)^2`, or `None` when
    /// that does not fit in a `usize`.
    pub fn window_area(&self) -> Option<usize> {
        let side = self.radius.checked_mul(2)?.checked_add(1)?;
        side.checked_mul(side)
    }

    /// Thresholds outside `[0, 1]` are legal (they force a uniform result)
    /// but almost always a mistake, so they are only reported.
    pub fn validate(&self) -> Result<()> {
        if i32::try_from(self.radius).is_err() || self.window_area().is_none() {
            return Err(GenerationError::InvalidRadius {
                radius: self.radius,
            });
        }
        if self.threshold.is_nan() {
            return Err(GenerationError::InvalidProbability {
                name: "cellular.threshold",
                value: self.threshold,
            });
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            warn!(
                "cellular threshold {} is outside [0, 1]; every cell will end up {}",
                self.threshold,
                if self.threshold <= 0.0 { "occupied" } else { "empty" }
            );
        }
        Ok(())
    }
}

/// Parameters of one drunk agent pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentParams {
    /// Number of walks (J).
    pub walks: usize,
    /// Steps per walk (I).
    pub steps_per_walk: usize,
    /// Room extent along the row axis.
    pub room_size_x: usize,
    /// Room extent along the column axis.
    pub room_size_y: usize,
    /// Base chance of stamping a room at the end of a walk.
    pub room_probability: f64,
    /// Added to the room chance after every walk without a room.
    pub room_probability_increment: f64,
    /// Base chance of turning after a successful move.
    pub turn_probability: f64,
    /// Added to the turn chance after every move without a turn.
    pub turn_probability_increment: f64,
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            walks: 5,
            steps_per_walk: 10,
            room_size_x: 5,
            room_size_y: 3,
            room_probability: 0.1,
            room_probability_increment: 0.05,
            turn_probability: 0.2,
            turn_probability_increment: 0.03,
        }
    }
}

impl AgentParams {
    /// Upper bound on the cells a single walk call can newly occupy:
    /// one mark per step plus one full room per walk.
    pub fn max_cells_per_call(&self) -> usize {
        self.walks * self.steps_per_walk + self.walks * self.room_size_x * self.room_size_y
    }

    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("agent.room_probability", self.room_probability),
            (
                "agent.room_probability_increment",
                self.room_probability_increment,
            ),
            ("agent.turn_probability", self.turn_probability),
            (
                "agent.turn_probability_increment",
                self.turn_probability_increment,
            ),
        ];
        for (name, value) in probabilities {
            if !value.is_finite() || value < 0.0 {
                return Err(GenerationError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }
}
