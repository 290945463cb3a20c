//! Game loop thread — runs the simulation engine at 60Hz and emits snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; snapshots leave the same
//! way. The loop shuts down when either channel disconnects or a Shutdown
//! command arrives.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use onslaught_core::commands::PlayerCommand;
use onslaught_core::constants::TICK_RATE;
use onslaught_core::state::GameStateSnapshot;
use onslaught_sim::engine::{SimConfig, SimulationEngine};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the frontend to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the snapshot receiver for the frontend.
pub fn spawn_game_loop(
    config: SimConfig,
) -> (mpsc::Sender<GameLoopCommand>, mpsc::Receiver<GameStateSnapshot>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let (snapshot_tx, snapshot_rx) = mpsc::channel::<GameStateSnapshot>();

    std::thread::Builder::new()
        .name("onslaught-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, snapshot_tx);
        })
        .expect("Failed to spawn game loop thread");

    (cmd_tx, snapshot_rx)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause/game-over internally)
        let snapshot = engine.tick();

        // 3. Emit snapshot; a dropped receiver means the frontend is gone
        if snapshot_tx.send(snapshot).is_err() {
            return;
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onslaught_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartGame)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_shuts_down_when_snapshot_receiver_dropped() {
        let (cmd_tx, snapshot_rx) = spawn_game_loop(SimConfig::default());
        cmd_tx
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();

        // First snapshot proves the loop is ticking.
        let snapshot = snapshot_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("No snapshot from game loop");
        assert!(matches!(
            snapshot.phase,
            GamePhase::Menu | GamePhase::Active
        ));

        // Dropping the receiver must terminate the thread; the command
        // channel then reports disconnect once the sender is gone too.
        drop(snapshot_rx);
        std::thread::sleep(Duration::from_millis(100));
        let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    }
}
