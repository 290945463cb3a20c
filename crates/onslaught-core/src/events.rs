//! Events emitted by the simulation for audio and lifecycle feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Discrete fire-and-forget events for the frontend sound system and
/// lifecycle sink. Delivered in the snapshot for the tick they occurred.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A weapon fired.
    Shoot { weapon: WeaponKind },
    /// An enemy was destroyed at this position.
    Explosion { position: Position },
    /// The player took contact damage.
    PlayerHit { remaining_health: i32 },
    /// A power-up was collected.
    Pickup { kind: PowerUpKind },
    /// A new wave began.
    WaveStart { wave: u32 },
    /// Terminal event: health reached zero.
    GameOver { final_score: u32 },
}
