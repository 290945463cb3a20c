//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands
//! at tick boundaries, runs all systems in a fixed order, and produces
//! `GameStateSnapshot`s. Completely headless (no rendering or audio
//! dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use onslaught_core::commands::PlayerCommand;
use onslaught_core::components::{Player, PlayerStatus};
use onslaught_core::enums::{Direction, GamePhase};
use onslaught_core::events::AudioEvent;
use onslaught_core::state::GameStateSnapshot;
use onslaught_core::types::{Position, SimTime};

use crate::systems;
use crate::systems::fire_control::FireControl;
use crate::systems::movement::InputState;
use crate::systems::wave_scheduler::WaveSchedule;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all scheduling state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    score: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    input: InputState,
    fire: FireControl,
    waves: WaveSchedule,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            score: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            input: InputState::default(),
            fire: FireControl::default(),
            waves: WaveSchedule::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.score,
            self.waves.wave,
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an enemy of a specific archetype at a position (for tests
    /// that need precise geometry).
    #[cfg(test)]
    pub fn spawn_enemy_at(
        &mut self,
        position: Position,
        archetype: onslaught_core::enums::EnemyArchetype,
    ) -> hecs::Entity {
        world_setup::spawn_enemy_at(&mut self.world, position, archetype)
    }

    /// Get a mutable reference to the ECS world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Move the player to an exact position (for tests).
    #[cfg(test)]
    pub fn place_player(&mut self, position: Position) {
        for (_entity, (_player, pos)) in self.world.query_mut::<(&Player, &mut Position)>() {
            *pos = position;
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands that do not apply in the
    /// current phase are ignored.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Menu {
                    self.reset();
                }
            }
            PlayerCommand::Restart => {
                if self.phase != GamePhase::Menu {
                    self.reset();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::MovePress { direction } => self.set_direction(direction, true),
            PlayerCommand::MoveRelease { direction } => self.set_direction(direction, false),
            PlayerCommand::SetAim { x, y } => {
                self.input.aim = Position::new(x, y);
            }
            PlayerCommand::TriggerPress => {
                self.fire.trigger_held = true;
            }
            PlayerCommand::TriggerRelease => {
                self.fire.trigger_held = false;
            }
            PlayerCommand::SwitchWeapon { weapon } => {
                for (_entity, (_player, status)) in
                    self.world.query_mut::<(&Player, &mut PlayerStatus)>()
                {
                    status.weapon = weapon;
                }
            }
        }
    }

    fn set_direction(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Up => self.input.up = held,
            Direction::Down => self.input.down = held,
            Direction::Left => self.input.left = held,
            Direction::Right => self.input.right = held,
        }
    }

    /// Reset all state to initial values and begin wave 1.
    fn reset(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.score = 0;
        self.input = InputState::default();
        self.fire = FireControl::default();
        self.audio_events.clear();

        world_setup::spawn_player(&mut self.world);
        self.waves = WaveSchedule::start(0);
        self.audio_events.push(AudioEvent::WaveStart { wave: 1 });
        self.phase = GamePhase::Active;
        log::info!("game started");
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Wave scheduling (staggered spawns, wave advancement)
        systems::wave_scheduler::run(
            &mut self.world,
            &mut self.rng,
            &mut self.waves,
            self.time.tick,
            &mut self.audio_events,
        );
        // 2. Fire control (continuous fire, bullet creation)
        systems::fire_control::run(
            &mut self.world,
            &mut self.fire,
            self.input.aim,
            self.time.tick,
            &mut self.rng,
            &mut self.audio_events,
        );
        // 3. Movement integration (homing, bullets, particles, player)
        systems::movement::run(&mut self.world, &self.input);
        // 4. Collision resolution (player-enemy, bullet-enemy, pickups)
        let player_died = systems::collision::run(
            &mut self.world,
            &mut self.rng,
            self.time.tick,
            &mut self.score,
            &mut self.despawn_buffer,
            &mut self.audio_events,
        );
        if player_died {
            // Terminal transition: no further systems run this tick or
            // any later tick, which also cancels all pending schedules.
            self.phase = GamePhase::GameOver;
            self.fire.trigger_held = false;
            self.audio_events.push(AudioEvent::GameOver {
                final_score: self.score,
            });
            log::info!("game over at wave {} with score {}", self.waves.wave, self.score);
            return;
        }
        // 5. Boost expiry
        systems::power_ups::run(&mut self.world, self.time.tick);
        // 6. Cleanup (out-of-bounds bullets, expired particles)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
