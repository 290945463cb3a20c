//! Movement integration system.
//!
//! Each tick: enemies re-aim at the player's start-of-tick position (pure
//! homing, no path smoothing), bullets and particles advance along their
//! immutable headings, the player moves by the vector sum of held
//! directional inputs clamped to the playfield, and particle lifetimes
//! are decremented by the tick duration.

use hecs::World;

use onslaught_core::components::{Boosts, Enemy, EnemyProfile, Particle, Player};
use onslaught_core::constants::{DT, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, PLAYER_BASE_SPEED};
use onslaught_core::enums::BoostKind;
use onslaught_core::types::{Extent, Position, Velocity};

/// Held directional inputs and the current aim point.
/// Opposite directions held together cancel to zero net movement.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub aim: Position,
}

/// Run movement integration for one tick.
pub fn run(world: &mut World, input: &InputState) {
    let player_pos = player_position(world);

    // Enemies: recompute heading toward the player, then integrate.
    if let Some(target) = player_pos {
        for (_entity, (_enemy, pos, vel, profile)) in
            world.query_mut::<(&Enemy, &Position, &mut Velocity, &EnemyProfile)>()
        {
            let heading = pos.heading_to(&target);
            *vel = Velocity::from_heading(heading, profile.speed);
        }
    }

    // Integrate everything with a velocity: enemies, bullets, particles.
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }

    // Particles additionally burn lifetime.
    for (_entity, particle) in world.query_mut::<&mut Particle>() {
        particle.remaining_secs -= DT;
    }

    move_player(world, input);
}

/// Apply held directional inputs to the player and clamp to the playfield.
fn move_player(world: &mut World, input: &InputState) {
    for (_entity, (_player, pos, extent, boosts)) in
        world.query_mut::<(&Player, &mut Position, &Extent, &Boosts)>()
    {
        let speed = PLAYER_BASE_SPEED + boosts.total(BoostKind::Speed);
        let step = speed * DT;

        let mut dx = 0.0;
        let mut dy = 0.0;
        if input.up {
            dy -= step;
        }
        if input.down {
            dy += step;
        }
        if input.left {
            dx -= step;
        }
        if input.right {
            dx += step;
        }

        let half_w = extent.width / 2.0;
        let half_h = extent.height / 2.0;
        pos.x = (pos.x + dx).clamp(half_w, PLAYFIELD_WIDTH - half_w);
        pos.y = (pos.y + dy).clamp(half_h, PLAYFIELD_HEIGHT - half_h);
    }
}

/// The player's current center position, if a player entity exists.
pub fn player_position(world: &World) -> Option<Position> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}
