//! Cleanup system: removes bullets that left the playfield and particles
//! whose lifetime has expired. Uses a pre-allocated buffer to avoid
//! per-tick allocation.

use hecs::{Entity, World};

use onslaught_core::components::{Bullet, Particle};
use onslaught_core::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use onslaught_core::types::Position;

/// Remove out-of-bounds bullets and expired particles.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, _bullet)) in world.query_mut::<(&Position, &Bullet)>() {
        if pos.x < 0.0 || pos.x > PLAYFIELD_WIDTH || pos.y < 0.0 || pos.y > PLAYFIELD_HEIGHT {
            despawn_buffer.push(entity);
        }
    }

    for (entity, particle) in world.query_mut::<&Particle>() {
        if particle.remaining_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
