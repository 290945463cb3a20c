//! Fire control system — one consolidated weapon state machine.
//!
//! The trigger is either released (idle) or held (firing). The first shot
//! after a press is immediate when the weapon's cooldown has elapsed;
//! while held, shots repeat at the weapon's fire interval. Release stops
//! the cadence. The cooldown clock persists across release/press, so
//! hammering the trigger cannot exceed the fire rate.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use onslaught_core::components::{Boosts, Player, PlayerStatus};
use onslaught_core::constants::{BASE_DAMAGE_MULTIPLIER, TICK_RATE};
use onslaught_core::enums::BoostKind;
use onslaught_core::events::AudioEvent;
use onslaught_core::types::Position;
use onslaught_core::weapons;

use crate::world_setup;

/// Fire-control state owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct FireControl {
    /// Whether the trigger is currently held.
    pub trigger_held: bool,
    /// Tick of the most recent shot, if any.
    pub last_shot_tick: Option<u64>,
}

impl FireControl {
    /// Whether the active weapon's cooldown has elapsed at `current_tick`.
    fn ready(&self, fire_interval_secs: f64, current_tick: u64) -> bool {
        let interval_ticks = (fire_interval_secs * TICK_RATE as f64).round() as u64;
        match self.last_shot_tick {
            Some(last) => current_tick.saturating_sub(last) >= interval_ticks,
            None => true,
        }
    }
}

/// Run fire control for one tick, spawning bullets if a shot is due.
pub fn run(
    world: &mut World,
    fire: &mut FireControl,
    aim: Position,
    current_tick: u64,
    rng: &mut ChaCha8Rng,
    audio_events: &mut Vec<AudioEvent>,
) {
    if !fire.trigger_held {
        return;
    }

    // Snapshot the firing parameters before spawning anything.
    let (origin, weapon, damage_multiplier) = {
        let mut query = world.query::<(&Player, &Position, &PlayerStatus, &Boosts)>();
        match query.iter().next() {
            Some((_, (_, pos, status, boosts))) => (
                *pos,
                status.weapon,
                BASE_DAMAGE_MULTIPLIER + boosts.total(BoostKind::Damage),
            ),
            None => return,
        }
    };

    let spec = weapons::spec(weapon);
    if !fire.ready(spec.fire_interval_secs, current_tick) {
        return;
    }

    let heading = origin.heading_to(&aim);
    let damage = (spec.damage as f64 * damage_multiplier).round() as i32;

    for _ in 0..spec.projectile_count {
        let offset = if spec.spread > 0.0 {
            rng.gen_range(-0.5..0.5) * spec.spread
        } else {
            0.0
        };
        world_setup::spawn_bullet(world, origin, heading + offset, spec.bullet_speed, damage);
    }

    fire.last_shot_tick = Some(current_tick);
    audio_events.push(AudioEvent::Shoot { weapon });
}
