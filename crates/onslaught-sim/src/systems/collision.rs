//! Collision resolution system.
//!
//! Resolution order per tick:
//! 1. player vs enemy — contact damage, enemy removed unconditionally;
//! 2. bullet vs enemy — first overlapping enemy only, bullet consumed;
//! 3. player vs power-up — effect applied exactly once.
//!
//! Removals are collected during each pass and applied before the next
//! pass runs, so a destroyed entity is never visited again in the same
//! tick. A bullet can never damage more than one enemy.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use onslaught_core::components::*;
use onslaught_core::constants::*;
use onslaught_core::events::AudioEvent;
use onslaught_core::types::{Extent, Position, Rect};

use crate::systems::power_ups;
use crate::world_setup;

/// Run collision resolution for one tick. Returns true if the player's
/// health reached zero (game over).
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    current_tick: u64,
    score: &mut u32,
    despawn_buffer: &mut Vec<Entity>,
    audio_events: &mut Vec<AudioEvent>,
) -> bool {
    let player_rect = match player_rect(world) {
        Some(rect) => rect,
        None => return false,
    };

    let player_died = resolve_player_enemy(world, rng, &player_rect, despawn_buffer, audio_events);
    resolve_bullet_enemy(world, rng, score, despawn_buffer, audio_events);
    resolve_player_power_up(
        world,
        &player_rect,
        current_tick,
        despawn_buffer,
        audio_events,
    );

    player_died
}

/// Pass 1: every enemy overlapping the player deals fixed contact damage
/// and is removed immediately, with an explosion at its last position.
fn resolve_player_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player_rect: &Rect,
    despawn_buffer: &mut Vec<Entity>,
    audio_events: &mut Vec<AudioEvent>,
) -> bool {
    despawn_buffer.clear();
    let mut explosion_positions: Vec<Position> = Vec::new();
    let mut hits = 0;

    {
        let mut query = world.query::<(&Enemy, &Position, &Extent)>();
        for (entity, (_enemy, pos, extent)) in query.iter() {
            if player_rect.overlaps(&Rect::centered(pos, extent)) {
                despawn_buffer.push(entity);
                explosion_positions.push(*pos);
                hits += 1;
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    if hits == 0 {
        return false;
    }

    let mut died = false;
    for (_entity, (_player, status)) in world.query_mut::<(&Player, &mut PlayerStatus)>() {
        status.health = (status.health - hits * ENEMY_CONTACT_DAMAGE).max(0);
        audio_events.push(AudioEvent::PlayerHit {
            remaining_health: status.health,
        });
        died = status.health == 0;
    }

    for pos in explosion_positions {
        world_setup::spawn_explosion(world, rng, pos);
        audio_events.push(AudioEvent::Explosion { position: pos });
    }

    died
}

/// Pass 2: each bullet damages at most the first enemy it overlaps and is
/// always consumed by that contact, even when the enemy survives.
fn resolve_bullet_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    score: &mut u32,
    despawn_buffer: &mut Vec<Entity>,
    audio_events: &mut Vec<AudioEvent>,
) {
    let bullets: Vec<(Entity, Rect, i32)> = world
        .query::<(&Bullet, &Position, &Extent)>()
        .iter()
        .map(|(entity, (bullet, pos, extent))| (entity, Rect::centered(pos, extent), bullet.damage))
        .collect();

    let enemies: Vec<(Entity, Rect, Position)> = world
        .query::<(&Enemy, &Position, &Extent)>()
        .iter()
        .map(|(entity, (_enemy, pos, extent))| (entity, Rect::centered(pos, extent), *pos))
        .collect();

    despawn_buffer.clear();
    let mut removed_enemies: Vec<Entity> = Vec::new();
    let mut explosion_positions: Vec<Position> = Vec::new();

    for (bullet_entity, bullet_rect, damage) in bullets {
        for (enemy_entity, enemy_rect, enemy_pos) in &enemies {
            if removed_enemies.contains(enemy_entity) {
                continue;
            }
            if !bullet_rect.overlaps(enemy_rect) {
                continue;
            }

            // First match wins: consume the bullet and stop scanning.
            despawn_buffer.push(bullet_entity);

            let killed = match world.get::<&mut EnemyProfile>(*enemy_entity) {
                Ok(mut profile) => {
                    profile.health -= damage;
                    profile.health <= 0
                }
                Err(_) => false,
            };

            if killed {
                removed_enemies.push(*enemy_entity);
                explosion_positions.push(*enemy_pos);
                *score += KILL_SCORE;
            }
            break;
        }
    }

    for entity in despawn_buffer.drain(..).chain(removed_enemies) {
        let _ = world.despawn(entity);
    }

    for pos in explosion_positions {
        audio_events.push(AudioEvent::Explosion { position: pos });
        world_setup::spawn_explosion(world, rng, pos);
        if rng.gen_range(0.0..1.0) < POWER_UP_DROP_CHANCE {
            world_setup::spawn_power_up(world, rng, pos);
        }
    }
}

/// Pass 3: power-ups overlapping the player apply their effect once and
/// are removed.
fn resolve_player_power_up(
    world: &mut World,
    player_rect: &Rect,
    current_tick: u64,
    despawn_buffer: &mut Vec<Entity>,
    audio_events: &mut Vec<AudioEvent>,
) {
    despawn_buffer.clear();
    let mut collected = Vec::new();

    {
        let mut query = world.query::<(&PowerUp, &Position, &Extent)>();
        for (entity, (power_up, pos, extent)) in query.iter() {
            if player_rect.overlaps(&Rect::centered(pos, extent)) {
                despawn_buffer.push(entity);
                collected.push(power_up.kind);
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for kind in collected {
        power_ups::apply(world, kind, current_tick);
        audio_events.push(AudioEvent::Pickup { kind });
    }
}

/// The player's bounding rectangle, if a player entity exists.
fn player_rect(world: &World) -> Option<Rect> {
    world
        .query::<(&Player, &Position, &Extent)>()
        .iter()
        .next()
        .map(|(_, (_, pos, extent))| Rect::centered(pos, extent))
}
