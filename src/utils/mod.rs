// src/utils/mod.rs
pub mod render;
