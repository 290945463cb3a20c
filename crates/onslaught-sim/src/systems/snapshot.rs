//! Snapshot system: queries the world and builds a complete
//! GameStateSnapshot. This system is read-only — it never modifies
//! the world.

use hecs::World;

use onslaught_core::components::*;
use onslaught_core::constants::{BASE_DAMAGE_MULTIPLIER, PLAYER_BASE_SPEED};
use onslaught_core::enums::{BoostKind, GamePhase};
use onslaught_core::events::AudioEvent;
use onslaught_core::state::*;
use onslaught_core::types::{Extent, Position, SimTime};
use onslaught_core::weapons;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: u32,
    wave: u32,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        score,
        wave,
        player: build_player(world),
        enemies: build_enemies(world),
        bullets: build_bullets(world),
        power_ups: build_power_ups(world),
        particles: build_particles(world),
        audio_events,
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position, &Extent, &PlayerStatus, &Boosts)>()
        .iter()
        .next()
        .map(|(_, (_, pos, extent, status, boosts))| PlayerView {
            position: *pos,
            extent: *extent,
            health: status.health,
            weapon: weapons::display_name(status.weapon).to_string(),
            speed: PLAYER_BASE_SPEED + boosts.total(BoostKind::Speed),
            damage_multiplier: BASE_DAMAGE_MULTIPLIER + boosts.total(BoostKind::Damage),
        })
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Position, &Extent, &EnemyProfile)>()
        .iter()
        .map(|(_, (_, pos, extent, profile))| EnemyView {
            position: *pos,
            extent: *extent,
            archetype: profile.archetype,
            health: profile.health,
        })
        .collect()
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    world
        .query::<(&Bullet, &Position, &Extent)>()
        .iter()
        .map(|(_, (_, pos, extent))| BulletView {
            position: *pos,
            extent: *extent,
        })
        .collect()
}

fn build_power_ups(world: &World) -> Vec<PowerUpView> {
    world
        .query::<(&PowerUp, &Position, &Extent)>()
        .iter()
        .map(|(_, (power_up, pos, extent))| PowerUpView {
            position: *pos,
            extent: *extent,
            kind: power_up.kind,
        })
        .collect()
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Particle, &Position)>()
        .iter()
        .map(|(_, (particle, pos))| ParticleView {
            position: *pos,
            opacity: (particle.remaining_secs / particle.base_secs).clamp(0.0, 1.0),
        })
        .collect()
}
