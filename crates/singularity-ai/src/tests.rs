#[cfg(test)]
mod tests {
    use glam::Vec3;

    use singularity_core::constants::*;
    use singularity_core::enums::{DroneKind, EnemyState};

    use crate::fsm::{evaluate, flank_point, yaw_towards, EnemyContext, EnemyRolls};
    use crate::profiles::get_profile;

    /// Enemy at (0, hover, -distance), player at the origin.
    fn make_context(kind: DroneKind, state: EnemyState, distance: f32) -> EnemyContext {
        let position = Vec3::new(0.0, 1.2, -distance);
        EnemyContext {
            kind,
            state,
            position,
            home: position,
            player_position: Vec3::new(0.0, PLAYER_EYE_HEIGHT, 0.0),
            flank_target: None,
            difficulty: 1.0,
            attack_ready: false,
            elapsed_secs: 0.0,
            bob_phase: 0.0,
            dt: DT,
        }
    }

    /// Rolls that never trigger a flank.
    fn no_flank() -> EnemyRolls {
        EnemyRolls {
            flank: 0.999,
            side: 0.0,
        }
    }

    #[test]
    fn test_chase_moves_toward_player() {
        let ctx = make_context(DroneKind::Basic, EnemyState::Chase, 5.0);
        let update = evaluate(&ctx, no_flank());
        assert_eq!(update.new_state, EnemyState::Chase);
        assert!(!update.state_changed);
        assert!(update.new_position.z > ctx.position.z, "Should close in on the player");
        let moved = (update.new_position.z - ctx.position.z).abs();
        assert!((moved - BASIC_DRONE_SPEED_NEAR * DT).abs() < 1e-4);
    }

    #[test]
    fn test_basic_drone_sprints_when_far() {
        let ctx = make_context(DroneKind::Basic, EnemyState::Chase, 20.0);
        let update = evaluate(&ctx, no_flank());
        let moved = (update.new_position.z - ctx.position.z).abs();
        assert!((moved - BASIC_DRONE_SPEED_FAR * DT).abs() < 1e-4);
    }

    #[test]
    fn test_enters_attack_within_range() {
        let ctx = make_context(DroneKind::Basic, EnemyState::Chase, BASIC_DRONE_ATTACK_RANGE - 0.1);
        let update = evaluate(&ctx, no_flank());
        assert!(update.state_changed);
        assert_eq!(update.new_state, EnemyState::Attack);
        assert!(update.attack_damage.is_none(), "Cooldown not ready yet");
    }

    #[test]
    fn test_attack_lands_when_cooldown_ready() {
        let mut ctx = make_context(DroneKind::Basic, EnemyState::Attack, 1.0);
        ctx.attack_ready = true;
        let update = evaluate(&ctx, no_flank());
        assert_eq!(update.attack_damage, Some(BASIC_DRONE_DAMAGE));
        assert_eq!(update.new_state, EnemyState::Attack);
    }

    #[test]
    fn test_advanced_drone_lunges_on_attack() {
        let mut ctx = make_context(DroneKind::Advanced, EnemyState::Attack, 2.0);
        ctx.attack_ready = true;
        let update = evaluate(&ctx, no_flank());
        assert_eq!(update.attack_damage, Some(ADVANCED_DRONE_DAMAGE));
        let moved = update.new_position.z - ctx.position.z;
        assert!((moved - ADVANCED_DRONE_LUNGE).abs() < 1e-4);
    }

    #[test]
    fn test_leaving_attack_range_returns_to_chase() {
        let ctx = make_context(DroneKind::Basic, EnemyState::Attack, 6.0);
        let update = evaluate(&ctx, no_flank());
        assert!(update.state_changed);
        assert_eq!(update.new_state, EnemyState::Chase);
    }

    #[test]
    fn test_advanced_drone_patrols_outside_aggro() {
        let ctx = make_context(DroneKind::Advanced, EnemyState::Chase, 40.0);
        let update = evaluate(&ctx, no_flank());
        assert_eq!(update.new_state, EnemyState::Patrol);
        // Stays near home, well away from the player
        assert!(update.new_position.distance(ctx.home) < ADVANCED_DRONE_PATROL_RADIUS + 0.5);
    }

    #[test]
    fn test_patrol_resumes_chase_in_aggro_range() {
        let ctx = make_context(DroneKind::Advanced, EnemyState::Patrol, 10.0);
        let update = evaluate(&ctx, EnemyRolls { flank: 0.0, side: 0.0 });
        // A patrol never jumps straight into a flank
        assert_eq!(update.new_state, EnemyState::Chase);
    }

    #[test]
    fn test_difficulty_extends_aggro_range() {
        let mut ctx = make_context(DroneKind::Advanced, EnemyState::Patrol, 20.0);
        assert_eq!(evaluate(&ctx, no_flank()).new_state, EnemyState::Patrol);
        ctx.difficulty = 2.0;
        assert_eq!(evaluate(&ctx, no_flank()).new_state, EnemyState::Chase);
    }

    #[test]
    fn test_chase_rolls_into_flank() {
        let ctx = make_context(DroneKind::Advanced, EnemyState::Chase, 8.0);
        let update = evaluate(&ctx, EnemyRolls { flank: 0.0, side: 0.9 });
        assert_eq!(update.new_state, EnemyState::Flank);
        let target = update.flank_target.expect("Flank needs a target");
        // Lateral offset from the player, perpendicular to the approach (which runs along Z)
        assert!((target.x.abs() - FLANK_OFFSET).abs() < 1e-4);
        assert!(target.z.abs() < 1e-4);
    }

    #[test]
    fn test_flank_reverts_to_chase_at_target() {
        let mut ctx = make_context(DroneKind::Advanced, EnemyState::Flank, 6.0);
        ctx.flank_target = Some(ctx.position + Vec3::new(FLANK_TOLERANCE * 0.5, 0.0, 0.0));
        let update = evaluate(&ctx, no_flank());
        assert_eq!(update.new_state, EnemyState::Chase);
        assert!(update.flank_target.is_none());
    }

    #[test]
    fn test_flank_keeps_moving_to_target() {
        let mut ctx = make_context(DroneKind::Basic, EnemyState::Flank, 8.0);
        let target = Vec3::new(5.0, 1.2, -8.0);
        ctx.flank_target = Some(target);
        let update = evaluate(&ctx, no_flank());
        assert_eq!(update.new_state, EnemyState::Flank);
        assert_eq!(update.flank_target, Some(target));
        assert!(update.new_position.x > 0.0);
    }

    #[test]
    fn test_attack_range_preempts_flank() {
        let mut ctx = make_context(DroneKind::Basic, EnemyState::Flank, 1.5);
        ctx.flank_target = Some(Vec3::new(10.0, 1.2, 0.0));
        let update = evaluate(&ctx, no_flank());
        assert_eq!(update.new_state, EnemyState::Attack);
        assert!(update.flank_target.is_none());
    }

    #[test]
    fn test_dead_never_changes() {
        let mut ctx = make_context(DroneKind::Basic, EnemyState::Dead, 1.0);
        ctx.attack_ready = true;
        let update = evaluate(&ctx, EnemyRolls { flank: 0.0, side: 0.0 });
        assert_eq!(update.new_state, EnemyState::Dead);
        assert_eq!(update.new_position, ctx.position);
        assert!(update.attack_damage.is_none());
        assert!(!update.state_changed);
    }

    #[test]
    fn test_flank_point_sides() {
        let enemy = Vec3::new(0.0, 1.0, -10.0);
        let player = Vec3::ZERO;
        let left = flank_point(enemy, player, 0.1);
        let right = flank_point(enemy, player, 0.9);
        assert!((left.x + right.x).abs() < 1e-4, "Sides should mirror");
        assert!((left.distance(right) - 2.0 * FLANK_OFFSET).abs() < 1e-3);
    }

    #[test]
    fn test_yaw_faces_target() {
        // Straight ahead down -Z is yaw 0
        assert!(yaw_towards(Vec3::ZERO, Vec3::NEG_Z).abs() < 1e-6);
        // Target on +X: facing right, forward = (-sin, -cos) = (1, 0)
        let yaw = yaw_towards(Vec3::ZERO, Vec3::X);
        assert!((-yaw.sin() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_advanced_profile_scales_with_difficulty() {
        let easy = get_profile(DroneKind::Advanced, 1.0);
        let hard = get_profile(DroneKind::Advanced, 2.0);
        assert_eq!(easy.health, ADVANCED_DRONE_BASE_HEALTH);
        assert_eq!(hard.health, ADVANCED_DRONE_BASE_HEALTH * 2);
        assert!(hard.speed > easy.speed);
        assert!(hard.attack_cooldown < easy.attack_cooldown);
    }

    #[test]
    fn test_basic_profile_attacks_faster_with_difficulty() {
        let easy = get_profile(DroneKind::Basic, 1.0);
        let hard = get_profile(DroneKind::Basic, 3.0);
        assert!((easy.attack_cooldown - BASIC_DRONE_ATTACK_COOLDOWN_SECS).abs() < 1e-6);
        assert!((hard.attack_cooldown - BASIC_DRONE_ATTACK_COOLDOWN_SECS / 3.0).abs() < 1e-6);
        // Only the cooldown scales for basic drones.
        assert_eq!(easy.health, hard.health);
        assert_eq!(easy.speed, hard.speed);
        assert_eq!(easy.sprint_speed, hard.sprint_speed);
    }

    #[test]
    fn test_difficulty_below_one_is_clamped() {
        assert_eq!(get_profile(DroneKind::Basic, 0.2), get_profile(DroneKind::Basic, 1.0));
    }

    #[test]
    fn test_hover_height_applied() {
        let ctx = make_context(DroneKind::Basic, EnemyState::Chase, 5.0);
        let update = evaluate(&ctx, no_flank());
        assert!((update.new_position.y - BASIC_DRONE_HOVER_HEIGHT).abs() < 1e-6);
    }
}
