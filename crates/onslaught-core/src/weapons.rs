//! Static weapon specifications.
//!
//! Bullets snapshot these values at fire time; switching weapons never
//! affects bullets already in flight.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKind;

/// Per-weapon static record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeaponSpec {
    /// Base damage per projectile (before the damage multiplier).
    pub damage: i32,
    /// Minimum time between consecutive shots (seconds).
    pub fire_interval_secs: f64,
    /// Projectile speed (px/s).
    pub bullet_speed: f64,
    /// Projectiles per shot.
    pub projectile_count: u32,
    /// Total angular spread (radians). Each projectile's heading is
    /// perturbed by an independent uniform(-0.5, 0.5) * spread offset.
    pub spread: f64,
}

/// Look up the spec for a weapon kind.
pub fn spec(kind: WeaponKind) -> WeaponSpec {
    match kind {
        WeaponKind::Blaster => WeaponSpec {
            damage: 1,
            fire_interval_secs: 0.3,
            bullet_speed: 600.0,
            projectile_count: 1,
            spread: 0.0,
        },
        WeaponKind::Shotgun => WeaponSpec {
            damage: 1,
            fire_interval_secs: 0.8,
            bullet_speed: 520.0,
            projectile_count: 5,
            spread: 0.6,
        },
        WeaponKind::Repeater => WeaponSpec {
            damage: 1,
            fire_interval_secs: 0.1,
            bullet_speed: 680.0,
            projectile_count: 1,
            spread: 0.0,
        },
    }
}

/// Display name for HUD sinks.
pub fn display_name(kind: WeaponKind) -> &'static str {
    match kind {
        WeaponKind::Blaster => "Blaster",
        WeaponKind::Shotgun => "Shotgun",
        WeaponKind::Repeater => "Repeater",
    }
}
