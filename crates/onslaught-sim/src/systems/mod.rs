//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only passes). They do not own entity state — all entity state
//! lives in components; scheduling state (waves, fire control, input)
//! lives in small structs owned by the engine.

pub mod cleanup;
pub mod collision;
pub mod fire_control;
pub mod movement;
pub mod power_ups;
pub mod snapshot;
pub mod wave_scheduler;
