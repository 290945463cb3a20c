//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Marks the player avatar entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an entity as an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Enemy stats fixed at spawn by archetype.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyProfile {
    pub archetype: EnemyArchetype,
    /// Homing speed (px/s).
    pub speed: f64,
    /// Remaining hit points.
    pub health: i32,
}

/// A bullet in flight. Heading and speed live in the Velocity component,
/// both fixed at creation; damage snapshots the firing weapon's damage
/// times the player's damage multiplier at fire time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub damage: i32,
}

/// A power-up waiting on the field to be picked up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
}

/// A transient explosion particle. Removed when remaining lifetime
/// reaches zero; opacity is derived as remaining / base while alive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub remaining_secs: f64,
    pub base_secs: f64,
}

/// Player health and armament.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStatus {
    /// Health, clamped to [0, PLAYER_MAX_HEALTH]. Zero ends the game.
    pub health: i32,
    pub weapon: WeaponKind,
}

/// A single active timed boost. Each pickup pushes its own entry with an
/// independent expiry tick, so overlapping pickups stack additively and
/// expire one by one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoostEntry {
    pub kind: BoostKind,
    pub amount: f64,
    pub expires_at_tick: u64,
}

/// All timed boosts currently active on the player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Boosts {
    pub entries: Vec<BoostEntry>,
}

impl Boosts {
    /// Sum of active bonuses of the given kind.
    pub fn total(&self, kind: BoostKind) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.amount)
            .sum()
    }
}
