//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Commands
//! that do not apply in the current phase are ignored rather than rejected.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement and aim ---
    /// A movement key was pressed.
    MovePress { direction: Direction },
    /// A movement key was released.
    MoveRelease { direction: Direction },
    /// Continuous pointer position update; bullets head toward this point.
    SetAim { x: f64, y: f64 },

    // --- Firing ---
    /// Fire trigger pressed: first shot immediate (cooldown permitting),
    /// then continuous fire at the weapon's interval while held.
    TriggerPress,
    /// Fire trigger released: stops continuous fire.
    TriggerRelease,
    /// Switch the active weapon. In-flight bullets are unaffected.
    SwitchWeapon { weapon: WeaponKind },

    // --- Lifecycle ---
    /// Start a new game from the menu.
    StartGame,
    /// Reset all state to initial values after game over and start again.
    Restart,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
