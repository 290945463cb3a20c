//! Simulation engine for ONSLAUGHT.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend sinks.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use onslaught_core as core;
