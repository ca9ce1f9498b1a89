#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::PlayerCommand;
    use crate::config::GameConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::AudioEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, Ray, SimTime};

    #[test]
    fn test_key_code_serializes_as_dom_code() {
        let json = serde_json::to_string(&KeyCode::KeyW).unwrap();
        assert_eq!(json, "\"KeyW\"");
        let back: KeyCode = serde_json::from_str("\"KeyD\"").unwrap();
        assert_eq!(back, KeyCode::KeyD);
    }

    #[test]
    fn test_shield_overflow_serde() {
        for v in [ShieldOverflow::Absorb, ShieldOverflow::CarryOver] {
            let json = serde_json::to_string(&v).unwrap();
            let back: ShieldOverflow = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_command_tagged_json() {
        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"KeyDown","key":"KeyA"}"#).unwrap();
        assert!(matches!(cmd, PlayerCommand::KeyDown { key: KeyCode::KeyA }));

        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"Fire","direction":[0.0,0.0,-1.0]}"#).unwrap();
        match cmd {
            PlayerCommand::Fire { direction } => assert_eq!(direction, Vec3::NEG_Z),
            other => panic!("Expected Fire, got {other:?}"),
        }
    }

    #[test]
    fn test_audio_event_tagged_json() {
        let json = serde_json::to_string(&AudioEvent::Gunshot { volume: 0.3 }).unwrap();
        assert!(json.contains("\"type\":\"Gunshot\""), "got {json}");
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Ready);
        assert!(back.enemies.is_empty());
    }

    // ---- Config ----

    #[test]
    fn test_config_defaults_follow_constants() {
        let config = GameConfig::default();
        assert_eq!(config.weapon.max_ammo, WEAPON_MAX_AMMO);
        assert_eq!(config.player.max_shield, PLAYER_MAX_SHIELD);
        assert_eq!(config.combat.shield_overflow, ShieldOverflow::Absorb);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_json_fills_defaults() {
        let config = GameConfig::from_json_str(
            r#"{
                "seed": 7,
                "weapon": {"max_ammo": 12},
                "combat": {"shield_overflow": "CarryOver"}
            }"#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.weapon.max_ammo, 12);
        assert_eq!(config.weapon.damage, WEAPON_DAMAGE);
        assert_eq!(config.combat.shield_overflow, ShieldOverflow::CarryOver);
        assert_eq!(config.waves.base_enemies, WAVE_BASE_ENEMIES);
    }

    #[test]
    fn test_config_rejects_zero_ammo() {
        let err = GameConfig::from_json_str(r#"{"weapon": {"max_ammo": 0}}"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "weapon.max_ammo"),
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_config_rejects_bad_frame_delta() {
        let mut config = GameConfig::default();
        config.max_frame_delta = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "max_frame_delta",
                ..
            })
        ));
    }

    #[test]
    fn test_config_parse_error() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_missing_file() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("here.json"));
    }

    #[test]
    fn test_wave_enemy_count_grows_then_caps() {
        let waves = GameConfig::default().waves;
        assert_eq!(waves.enemy_count(1), WAVE_BASE_ENEMIES + WAVE_ENEMIES_PER_WAVE);
        let mut previous = 0;
        for wave in 1..50 {
            let count = waves.enemy_count(wave);
            assert!(count >= previous, "count shrank at wave {wave}");
            assert!(count <= WAVE_MAX_ENEMIES);
            previous = count;
        }
        assert_eq!(waves.enemy_count(49), WAVE_MAX_ENEMIES);
    }

    #[test]
    fn test_wave_difficulty_caps() {
        let waves = GameConfig::default().waves;
        assert_eq!(waves.difficulty(1), 1.0);
        assert!((waves.difficulty(3) - 1.5).abs() < 1e-6);
        assert_eq!(waves.difficulty(100), WAVE_MAX_DIFFICULTY);
    }

    #[test]
    fn test_power_up_cadence() {
        let waves = GameConfig::default().waves;
        assert!(!waves.spawns_power_up(1));
        assert!(waves.spawns_power_up(2));
        assert!(!waves.spawns_power_up(3));
        assert!(waves.spawns_power_up(4));

        let mut disabled = waves.clone();
        disabled.power_up_every = 0;
        assert!(!disabled.spawns_power_up(2));
    }

    // ---- Types ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(DT);
        }
        assert_eq!(time.frame, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_horizontal_distance_ignores_height() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 10.0, 4.0);
        assert!((a.horizontal_distance_to(&b) - 5.0).abs() < 1e-6);
        assert!(a.distance_to(&b) > 5.0);
    }

    #[test]
    fn test_ray_rejects_zero_direction() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0)).unwrap();
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ray_sphere_hit_and_miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        let t = ray.intersect_sphere(Vec3::new(0.0, 0.0, -10.0), 1.0).unwrap();
        assert!((t - 9.0).abs() < 1e-5);

        // Off to the side
        assert!(ray.intersect_sphere(Vec3::new(5.0, 0.0, -10.0), 1.0).is_none());
        // Behind the origin
        assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0).is_none());
    }

    #[test]
    fn test_ray_from_inside_sphere_reports_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X).unwrap();
        let t = ray.intersect_sphere(Vec3::ZERO, 2.0).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }
}
