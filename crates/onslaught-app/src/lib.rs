//! ONSLAUGHT host application.
//!
//! Wires the simulation engine to whatever frontend consumes it: a
//! game-loop thread ticks the engine at the fixed rate, takes player
//! commands over a channel, and emits snapshots over another.

pub mod game_loop;

pub use onslaught_core as core;
