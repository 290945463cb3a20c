//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype, fixing speed/health/size at spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Baseline enemy: moderate speed, one hit.
    #[default]
    Normal,
    /// Fast mover: high speed, one hit, smaller.
    Fast,
    /// Tank: slow, absorbs multiple hits, larger.
    Tank,
}

/// Weapon kind carried by the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Default single-shot weapon.
    #[default]
    Blaster,
    /// Multi-projectile weapon with angular spread.
    Shotgun,
    /// High fire-rate single-shot weapon.
    Repeater,
}

/// Power-up kind. Health is instantaneous; Speed and Damage are timed
/// additive boosts that expire individually.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    #[default]
    Health,
    Speed,
    Damage,
}

/// Kind of timed boost currently active on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoostKind {
    Speed,
    Damage,
}

/// Movement direction for press/release input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Active,
    Paused,
    GameOver,
}
