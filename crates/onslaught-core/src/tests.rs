#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::{BoostEntry, Boosts};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Extent, Position, Rect, SimTime, Velocity};
    use crate::weapons;

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_enemy_archetype_serde() {
        let variants = vec![
            EnemyArchetype::Normal,
            EnemyArchetype::Fast,
            EnemyArchetype::Tank,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyArchetype = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_weapon_kind_serde() {
        let variants = vec![WeaponKind::Blaster, WeaponKind::Shotgun, WeaponKind::Repeater];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: WeaponKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_power_up_kind_serde() {
        let variants = vec![PowerUpKind::Health, PowerUpKind::Speed, PowerUpKind::Damage];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: PowerUpKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::MovePress {
                direction: Direction::Up,
            },
            PlayerCommand::MoveRelease {
                direction: Direction::Left,
            },
            PlayerCommand::SetAim { x: 120.0, y: 360.5 },
            PlayerCommand::TriggerPress,
            PlayerCommand::TriggerRelease,
            PlayerCommand::SwitchWeapon {
                weapon: WeaponKind::Shotgun,
            },
            PlayerCommand::StartGame,
            PlayerCommand::Restart,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify AudioEvent round-trips through serde.
    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::Shoot {
                weapon: WeaponKind::Blaster,
            },
            AudioEvent::Explosion {
                position: Position::new(100.0, 200.0),
            },
            AudioEvent::PlayerHit {
                remaining_health: 70,
            },
            AudioEvent::Pickup {
                kind: PowerUpKind::Speed,
            },
            AudioEvent::WaveStart { wave: 3 },
            AudioEvent::GameOver { final_score: 240 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: AudioEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    // ---- Geometry ----

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_position_heading() {
        let origin = Position::new(0.0, 0.0);

        // Straight right (+x)
        let right = Position::new(100.0, 0.0);
        assert!((origin.heading_to(&right) - 0.0).abs() < 1e-10);

        // Straight down (+y, screen coordinates)
        let down = Position::new(0.0, 100.0);
        let expected = std::f64::consts::FRAC_PI_2;
        assert!(
            (origin.heading_to(&down) - expected).abs() < 1e-10,
            "Downward heading should be PI/2, got {}",
            origin.heading_to(&down)
        );
    }

    #[test]
    fn test_velocity_from_heading() {
        let v = Velocity::from_heading(0.0, 10.0);
        assert!((v.x - 10.0).abs() < 1e-10);
        assert!(v.y.abs() < 1e-10);
        assert!((v.speed() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_rect_overlap_symmetric() {
        let a = Rect::centered(&Position::new(10.0, 10.0), &Extent::new(10.0, 10.0));
        let b = Rect::centered(&Position::new(15.0, 12.0), &Extent::new(10.0, 10.0));
        let c = Rect::centered(&Position::new(50.0, 50.0), &Extent::new(10.0, 10.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_rect_edge_touching_is_not_collision() {
        // b's left edge exactly on a's right edge
        let a = Rect::centered(&Position::new(0.0, 0.0), &Extent::new(10.0, 10.0));
        let b = Rect::centered(&Position::new(10.0, 0.0), &Extent::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_rect_centered_on_position() {
        let r = Rect::centered(&Position::new(100.0, 50.0), &Extent::new(40.0, 20.0));
        assert_eq!(r.left, 80.0);
        assert_eq!(r.right, 120.0);
        assert_eq!(r.top, 40.0);
        assert_eq!(r.bottom, 60.0);
    }

    // ---- Weapons ----

    #[test]
    fn test_weapon_specs_sane() {
        for kind in [WeaponKind::Blaster, WeaponKind::Shotgun, WeaponKind::Repeater] {
            let spec = weapons::spec(kind);
            assert!(spec.damage >= 1);
            assert!(spec.fire_interval_secs > 0.0);
            assert!(spec.bullet_speed > 0.0);
            assert!(spec.projectile_count >= 1);
            assert!(spec.spread >= 0.0);
        }
        // Shotgun is the multi-projectile weapon
        assert!(weapons::spec(WeaponKind::Shotgun).projectile_count > 1);
        assert!(weapons::spec(WeaponKind::Shotgun).spread > 0.0);
        // Repeater fires faster than the default
        assert!(
            weapons::spec(WeaponKind::Repeater).fire_interval_secs
                < weapons::spec(WeaponKind::Blaster).fire_interval_secs
        );
    }

    // ---- Boosts ----

    #[test]
    fn test_boost_totals_by_kind() {
        let boosts = Boosts {
            entries: vec![
                BoostEntry {
                    kind: BoostKind::Speed,
                    amount: SPEED_BOOST_AMOUNT,
                    expires_at_tick: 100,
                },
                BoostEntry {
                    kind: BoostKind::Speed,
                    amount: SPEED_BOOST_AMOUNT,
                    expires_at_tick: 200,
                },
                BoostEntry {
                    kind: BoostKind::Damage,
                    amount: DAMAGE_BOOST_AMOUNT,
                    expires_at_tick: 150,
                },
            ],
        };
        assert!((boosts.total(BoostKind::Speed) - 2.0 * SPEED_BOOST_AMOUNT).abs() < 1e-10);
        assert!((boosts.total(BoostKind::Damage) - DAMAGE_BOOST_AMOUNT).abs() < 1e-10);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_archetype_weights_sum_below_one() {
        // Tank takes the remainder of the weight space.
        assert!(ENEMY_WEIGHT_NORMAL + ENEMY_WEIGHT_FAST < 1.0);
    }
}
