//! Wave scheduling system — staggered enemy spawns and wave escalation.
//!
//! Wave N schedules N * 5 spawns at a fixed stagger so enemies trickle in
//! rather than burst. After the last spawn plus a rest buffer, the next
//! wave begins automatically. All scheduling is expressed in ticks, so
//! halting the tick pipeline (game over) inherently cancels every pending
//! spawn and wave advance.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use onslaught_core::constants::{ENEMIES_PER_WAVE, SPAWN_STAGGER_SECS, TICK_RATE, WAVE_REST_SECS};
use onslaught_core::events::AudioEvent;

use crate::world_setup;

/// Wave scheduling state owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct WaveSchedule {
    /// Current wave number, starting at 1. Zero means no game running.
    pub wave: u32,
    /// Spawns still owed for the current wave.
    remaining_spawns: u32,
    /// Tick of the next staggered spawn (while spawns remain).
    next_spawn_tick: u64,
    /// Tick at which the next wave begins (set after the last spawn).
    next_wave_tick: Option<u64>,
}

impl WaveSchedule {
    /// Begin wave 1 with its first spawn due immediately.
    pub fn start(current_tick: u64) -> Self {
        let mut schedule = Self::default();
        schedule.begin_wave(1, current_tick);
        schedule
    }

    /// Enter the given wave: schedule wave * ENEMIES_PER_WAVE spawns,
    /// the first due immediately.
    fn begin_wave(&mut self, wave: u32, current_tick: u64) {
        self.wave = wave;
        self.remaining_spawns = wave * ENEMIES_PER_WAVE;
        self.next_spawn_tick = current_tick;
        self.next_wave_tick = None;
    }

    fn stagger_ticks() -> u64 {
        (SPAWN_STAGGER_SECS * TICK_RATE as f64).round() as u64
    }

    fn rest_ticks() -> u64 {
        (WAVE_REST_SECS * TICK_RATE as f64).round() as u64
    }
}

/// Check the schedule: spawn a due enemy or advance to the next wave.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut WaveSchedule,
    current_tick: u64,
    audio_events: &mut Vec<AudioEvent>,
) {
    if schedule.wave == 0 {
        return;
    }

    if schedule.remaining_spawns > 0 {
        if current_tick >= schedule.next_spawn_tick {
            world_setup::spawn_enemy(world, rng);
            schedule.remaining_spawns -= 1;
            if schedule.remaining_spawns > 0 {
                schedule.next_spawn_tick = current_tick + WaveSchedule::stagger_ticks();
            } else {
                schedule.next_wave_tick = Some(current_tick + WaveSchedule::rest_ticks());
            }
        }
    } else if let Some(advance_tick) = schedule.next_wave_tick {
        if current_tick >= advance_tick {
            let next = schedule.wave + 1;
            schedule.begin_wave(next, current_tick);
            audio_events.push(AudioEvent::WaveStart { wave: next });
            log::info!("wave {next} started ({} spawns)", next * ENEMIES_PER_WAVE);
        }
    }
}
