//! Power-up effect engine.
//!
//! Effects are tagged variants applied exactly once on pickup. Health is
//! instantaneous; Speed and Damage push an independent boost entry with
//! its own expiry tick. Entries stack additively and are removed one by
//! one as their expiry ticks pass, so the net bonus always returns to
//! baseline once every overlapping boost has run out.

use hecs::World;

use onslaught_core::components::{BoostEntry, Boosts, Player, PlayerStatus};
use onslaught_core::constants::*;
use onslaught_core::enums::{BoostKind, PowerUpKind};

/// Remove boost entries whose expiry tick has passed.
pub fn run(world: &mut World, current_tick: u64) {
    for (_entity, (_player, boosts)) in world.query_mut::<(&Player, &mut Boosts)>() {
        boosts.entries.retain(|e| e.expires_at_tick > current_tick);
    }
}

/// Apply a collected power-up's effect to the player.
pub fn apply(world: &mut World, kind: PowerUpKind, current_tick: u64) {
    let duration_ticks = (BOOST_DURATION_SECS * TICK_RATE as f64).round() as u64;

    for (_entity, (_player, status, boosts)) in
        world.query_mut::<(&Player, &mut PlayerStatus, &mut Boosts)>()
    {
        match kind {
            PowerUpKind::Health => {
                status.health = (status.health + HEALTH_RESTORE_AMOUNT).min(PLAYER_MAX_HEALTH);
            }
            PowerUpKind::Speed => boosts.entries.push(BoostEntry {
                kind: BoostKind::Speed,
                amount: SPEED_BOOST_AMOUNT,
                expires_at_tick: current_tick + duration_ticks,
            }),
            PowerUpKind::Damage => boosts.entries.push(BoostEntry {
                kind: BoostKind::Damage,
                amount: DAMAGE_BOOST_AMOUNT,
                expires_at_tick: current_tick + duration_ticks,
            }),
        }
    }
}
