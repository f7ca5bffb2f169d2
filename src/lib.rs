// src/lib.rs

pub mod error;
pub mod generator;
pub mod map;
pub mod simulation;
pub mod utils;

pub use error::{GenerationError, Result};
