//! Headless demo driver: runs a scripted session against the game loop
//! and logs HUD updates. Real frontends replace this binary and consume
//! the same command/snapshot channels.

use std::time::Duration;

use onslaught_app::game_loop::{spawn_game_loop, GameLoopCommand};
use onslaught_core::commands::PlayerCommand;
use onslaught_core::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use onslaught_core::enums::{Direction, GamePhase};
use onslaught_core::events::AudioEvent;
use onslaught_sim::engine::SimConfig;

fn main() {
    env_logger::init();

    let (cmd_tx, snapshot_rx) = spawn_game_loop(SimConfig::default());

    let commands = [
        PlayerCommand::StartGame,
        PlayerCommand::SetAim {
            x: PLAYFIELD_WIDTH,
            y: PLAYFIELD_HEIGHT / 2.0,
        },
        PlayerCommand::TriggerPress,
        PlayerCommand::MovePress {
            direction: Direction::Right,
        },
    ];
    for cmd in commands {
        if cmd_tx.send(GameLoopCommand::PlayerCommand(cmd)).is_err() {
            return;
        }
    }

    let mut last_wave = 0;
    loop {
        let snapshot = match snapshot_rx.recv_timeout(Duration::from_secs(2)) {
            Ok(snapshot) => snapshot,
            Err(_) => {
                log::error!("game loop stopped responding");
                return;
            }
        };

        if snapshot.wave != last_wave {
            last_wave = snapshot.wave;
            log::info!("HUD: wave {last_wave}");
        }

        for event in &snapshot.audio_events {
            if let AudioEvent::GameOver { final_score } = event {
                println!("Game over! Final score: {final_score}");
                let _ = cmd_tx.send(GameLoopCommand::Shutdown);
                return;
            }
        }

        if snapshot.phase == GamePhase::GameOver {
            let _ = cmd_tx.send(GameLoopCommand::Shutdown);
            return;
        }
    }
}
