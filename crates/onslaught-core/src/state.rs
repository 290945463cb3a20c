//! Game state snapshot — the complete visible state sent to the frontend
//! each tick. This is the contract for the render, HUD, and audio sinks.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::{Extent, Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub wave: u32,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub power_ups: Vec<PowerUpView>,
    pub particles: Vec<ParticleView>,
    pub audio_events: Vec<AudioEvent>,
}

/// Player avatar state for rendering and the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub extent: Extent,
    pub health: i32,
    /// Active weapon display name.
    pub weapon: String,
    /// Movement speed including active boosts (px/s).
    pub speed: f64,
    /// Damage multiplier including active boosts.
    pub damage_multiplier: f64,
}

/// A live enemy on the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub extent: Extent,
    pub archetype: EnemyArchetype,
    pub health: i32,
}

/// A bullet in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Position,
    pub extent: Extent,
}

/// A power-up waiting to be collected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub position: Position,
    pub extent: Extent,
    pub kind: PowerUpKind,
}

/// An explosion particle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    /// Derived as remaining lifetime / base lifetime.
    pub opacity: f64,
}
