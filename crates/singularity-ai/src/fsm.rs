//! Enemy behavior finite state machine.
//!
//! Pure functions that compute state transitions, movement and attacks for
//! one drone based on its kind, current state and the player's position.
//! No ECS dependency and no RNG: random draws arrive pre-rolled in
//! `EnemyRolls` so the same inputs always give the same update.
//!
//! All movement happens on the ground plane; height comes from the
//! profile's hover parameters.

use glam::Vec3;

use singularity_core::constants::{FLANK_OFFSET, FLANK_TOLERANCE};
use singularity_core::enums::{DroneKind, EnemyState};

use crate::profiles::{get_profile, DroneProfile};

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext {
    pub kind: DroneKind,
    pub state: EnemyState,
    pub position: Vec3,
    pub home: Vec3,
    pub player_position: Vec3,
    pub flank_target: Option<Vec3>,
    pub difficulty: f32,
    /// Attack cooldown has expired.
    pub attack_ready: bool,
    pub elapsed_secs: f32,
    pub bob_phase: f32,
    pub dt: f32,
}

/// Uniform draws in [0, 1) supplied by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnemyRolls {
    /// Compared against the per-frame flank chance.
    pub flank: f32,
    /// Below 0.5 flanks to the left, otherwise to the right.
    pub side: f32,
}

/// Output from the enemy FSM.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyUpdate {
    pub new_state: EnemyState,
    pub new_position: Vec3,
    pub flank_target: Option<Vec3>,
    /// Facing around Y, toward the player.
    pub yaw: f32,
    /// Damage dealt to the player this frame, if an attack landed.
    pub attack_damage: Option<f32>,
    pub state_changed: bool,
}

/// Evaluate the FSM for one enemy.
pub fn evaluate(ctx: &EnemyContext, rolls: EnemyRolls) -> EnemyUpdate {
    let yaw = yaw_towards(ctx.position, ctx.player_position);

    if ctx.state == EnemyState::Dead {
        return EnemyUpdate {
            new_state: EnemyState::Dead,
            new_position: ctx.position,
            flank_target: None,
            yaw,
            attack_damage: None,
            state_changed: false,
        };
    }

    let profile = get_profile(ctx.kind, ctx.difficulty);
    let distance = flat(ctx.player_position - ctx.position).length();

    let (new_state, new_position, flank_target, attack_damage) =
        if distance <= profile.attack_range {
            evaluate_attack(ctx, &profile)
        } else if distance > profile.aggro_range {
            evaluate_patrol(ctx, &profile)
        } else {
            match (ctx.state, ctx.flank_target) {
                (EnemyState::Flank, Some(target)) => {
                    evaluate_flank(ctx, &profile, target, distance)
                }
                _ => evaluate_chase(ctx, &profile, rolls, distance),
            }
        };

    EnemyUpdate {
        new_state,
        new_position: hover(new_position, ctx, &profile),
        flank_target,
        yaw,
        attack_damage,
        state_changed: new_state != ctx.state,
    }
}

type Step = (EnemyState, Vec3, Option<Vec3>, Option<f32>);

fn evaluate_attack(ctx: &EnemyContext, profile: &DroneProfile) -> Step {
    if !ctx.attack_ready {
        return (EnemyState::Attack, ctx.position, None, None);
    }

    let position = if profile.lunge > 0.0 {
        step_towards(ctx.position, ctx.player_position, profile.lunge)
    } else {
        ctx.position
    };
    (EnemyState::Attack, position, None, Some(profile.attack_damage))
}

fn evaluate_patrol(ctx: &EnemyContext, profile: &DroneProfile) -> Step {
    let angle = ctx.elapsed_secs * 0.5 + ctx.bob_phase;
    let patrol_point = ctx.home
        + Vec3::new(angle.sin(), 0.0, angle.cos()) * profile.patrol_radius;
    let position = step_towards(ctx.position, patrol_point, profile.speed * ctx.dt);
    (EnemyState::Patrol, position, None, None)
}

fn evaluate_flank(
    ctx: &EnemyContext,
    profile: &DroneProfile,
    target: Vec3,
    distance: f32,
) -> Step {
    if flat(target - ctx.position).length() <= FLANK_TOLERANCE {
        let position = chase_step(ctx, profile, distance);
        return (EnemyState::Chase, position, None, None);
    }

    let position = step_towards(ctx.position, target, profile.chase_speed(distance) * ctx.dt);
    (EnemyState::Flank, position, Some(target), None)
}

fn evaluate_chase(
    ctx: &EnemyContext,
    profile: &DroneProfile,
    rolls: EnemyRolls,
    distance: f32,
) -> Step {
    // Flanking only breaks off an ongoing chase.
    let flank_chance = profile.flank_chance_per_sec * ctx.dt;
    if ctx.state == EnemyState::Chase && rolls.flank < flank_chance {
        let target = flank_point(ctx.position, ctx.player_position, rolls.side);
        let position = step_towards(ctx.position, target, profile.chase_speed(distance) * ctx.dt);
        return (EnemyState::Flank, position, Some(target), None);
    }

    let position = chase_step(ctx, profile, distance);
    (EnemyState::Chase, position, None, None)
}

fn chase_step(ctx: &EnemyContext, profile: &DroneProfile, distance: f32) -> Vec3 {
    let step = profile.chase_speed(distance) * ctx.dt;
    let position = step_towards(ctx.position, ctx.player_position, step);
    if profile.evasion <= 0.0 {
        return position;
    }

    let t = ctx.elapsed_secs;
    let weave = Vec3::new((t * 4.0).sin(), 0.0, (t * 3.0).cos()) * profile.evasion;
    position + weave * step
}

/// Point beside the player, perpendicular to the enemy's line of approach.
pub fn flank_point(enemy: Vec3, player: Vec3, side_roll: f32) -> Vec3 {
    let approach = flat(player - enemy).normalize_or_zero();
    let lateral = Vec3::new(-approach.z, 0.0, approach.x);
    let side = if side_roll < 0.5 { -1.0 } else { 1.0 };
    let target = player + lateral * FLANK_OFFSET * side;
    Vec3::new(target.x, enemy.y, target.z)
}

/// Yaw that faces `to` from `from`, matching a camera that looks down -Z at yaw 0.
pub fn yaw_towards(from: Vec3, to: Vec3) -> f32 {
    let d = flat(to - from);
    if d.length_squared() <= f32::EPSILON {
        return 0.0;
    }
    (-d.x).atan2(-d.z)
}

/// Move up to `max_step` toward `to` on the ground plane without overshooting.
fn step_towards(from: Vec3, to: Vec3, max_step: f32) -> Vec3 {
    let delta = flat(to - from);
    let distance = delta.length();
    if distance <= max_step || distance <= f32::EPSILON {
        Vec3::new(to.x, from.y, to.z)
    } else {
        from + delta / distance * max_step
    }
}

fn hover(position: Vec3, ctx: &EnemyContext, profile: &DroneProfile) -> Vec3 {
    let bob = profile.bob_amplitude * (ctx.elapsed_secs * 4.0 + ctx.bob_phase).sin();
    Vec3::new(position.x, profile.hover_height + bob, position.z)
}

fn flat(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
