//! Entity spawn factories for populating the simulation world.
//!
//! Creates the player avatar, enemies, bullets, power-ups, and explosion
//! particle bursts with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use onslaught_core::components::*;
use onslaught_core::constants::*;
use onslaught_core::enums::*;
use onslaught_core::types::{Extent, Position, Velocity};

/// Spawn the player avatar at the playfield center with full health and
/// the default weapon.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        Player,
        Position::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
        Extent::new(PLAYER_SIZE, PLAYER_SIZE),
        PlayerStatus {
            health: PLAYER_MAX_HEALTH,
            weapon: WeaponKind::default(),
        },
        Boosts::default(),
    ))
}

/// Spawn a single enemy at a random point strictly outside one of the four
/// playfield edges, with a weighted-random archetype.
pub fn spawn_enemy(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let archetype = roll_archetype(rng);
    let position = edge_spawn_position(rng, archetype_extent(archetype));
    spawn_enemy_at(world, position, archetype)
}

/// Spawn an enemy of a specific archetype at a specific position.
pub fn spawn_enemy_at(
    world: &mut World,
    position: Position,
    archetype: EnemyArchetype,
) -> hecs::Entity {
    let (speed, health, size) = archetype_params(archetype);
    world.spawn((
        Enemy,
        position,
        Velocity::default(),
        Extent::new(size, size),
        EnemyProfile {
            archetype,
            speed,
            health,
        },
    ))
}

/// Spawn a bullet from `origin` along a fixed heading. Damage and speed
/// are snapshotted from the firing weapon and never updated afterwards.
pub fn spawn_bullet(
    world: &mut World,
    origin: Position,
    heading: f64,
    speed: f64,
    damage: i32,
) -> hecs::Entity {
    world.spawn((
        Bullet { damage },
        origin,
        Velocity::from_heading(heading, speed),
        Extent::new(BULLET_SIZE, BULLET_SIZE),
    ))
}

/// Spawn a power-up of uniformly random kind at the given position.
pub fn spawn_power_up(world: &mut World, rng: &mut ChaCha8Rng, position: Position) -> hecs::Entity {
    let kind = match rng.gen_range(0..3) {
        0 => PowerUpKind::Health,
        1 => PowerUpKind::Speed,
        _ => PowerUpKind::Damage,
    };
    world.spawn((
        PowerUp { kind },
        position,
        Extent::new(POWER_UP_SIZE, POWER_UP_SIZE),
    ))
}

/// Spawn a radial burst of explosion particles at the given position,
/// each with an independent random heading, speed, and lifetime.
pub fn spawn_explosion(world: &mut World, rng: &mut ChaCha8Rng, position: Position) {
    for _ in 0..EXPLOSION_PARTICLE_COUNT {
        let heading: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let speed: f64 = rng.gen_range(PARTICLE_MIN_SPEED..PARTICLE_MAX_SPEED);
        let lifetime: f64 = rng.gen_range(PARTICLE_MIN_LIFETIME_SECS..PARTICLE_MAX_LIFETIME_SECS);
        world.spawn((
            Particle {
                remaining_secs: lifetime,
                base_secs: lifetime,
            },
            position,
            Velocity::from_heading(heading, speed),
            Extent::new(PARTICLE_SIZE, PARTICLE_SIZE),
        ));
    }
}

/// Weighted archetype roll: 60% Normal, 30% Fast, 10% Tank.
fn roll_archetype(rng: &mut ChaCha8Rng) -> EnemyArchetype {
    let roll: f64 = rng.gen_range(0.0..1.0);
    if roll < ENEMY_WEIGHT_NORMAL {
        EnemyArchetype::Normal
    } else if roll < ENEMY_WEIGHT_NORMAL + ENEMY_WEIGHT_FAST {
        EnemyArchetype::Fast
    } else {
        EnemyArchetype::Tank
    }
}

/// Pick a spawn center strictly outside a random playfield edge.
/// The offset is a full entity size, so the bounding box clears the edge.
fn edge_spawn_position(rng: &mut ChaCha8Rng, size: f64) -> Position {
    let side = rng.gen_range(0..4);
    match side {
        // Top
        0 => Position::new(rng.gen_range(0.0..PLAYFIELD_WIDTH), -size),
        // Right
        1 => Position::new(PLAYFIELD_WIDTH + size, rng.gen_range(0.0..PLAYFIELD_HEIGHT)),
        // Bottom
        2 => Position::new(rng.gen_range(0.0..PLAYFIELD_WIDTH), PLAYFIELD_HEIGHT + size),
        // Left
        _ => Position::new(-size, rng.gen_range(0.0..PLAYFIELD_HEIGHT)),
    }
}

fn archetype_extent(archetype: EnemyArchetype) -> f64 {
    archetype_params(archetype).2
}

/// Get spawn parameters for an enemy archetype: (speed px/s, health, size px).
pub fn archetype_params(archetype: EnemyArchetype) -> (f64, i32, f64) {
    match archetype {
        EnemyArchetype::Normal => (ENEMY_NORMAL_SPEED, ENEMY_NORMAL_HEALTH, ENEMY_NORMAL_SIZE),
        EnemyArchetype::Fast => (ENEMY_FAST_SPEED, ENEMY_FAST_HEALTH, ENEMY_FAST_SIZE),
        EnemyArchetype::Tank => (ENEMY_TANK_SPEED, ENEMY_TANK_HEALTH, ENEMY_TANK_SIZE),
    }
}
