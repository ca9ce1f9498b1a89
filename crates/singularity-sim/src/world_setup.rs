//! Entity spawn factories.
//!
//! Creates enemy, power-up and effect entities with the
//! appropriate component bundles.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use singularity_core::components::*;
use singularity_core::constants::*;
use singularity_core::enums::*;
use singularity_core::types::{Position, Velocity};

use singularity_ai::profiles::get_profile;

/// Spawn one drone at `position` (height is replaced by the kind's hover height).
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    id: u32,
    kind: DroneKind,
    position: Vec3,
    difficulty: f32,
) -> hecs::Entity {
    let profile = get_profile(kind, difficulty);
    let home = Vec3::new(position.x, profile.hover_height, position.z);

    let brain = EnemyBrain {
        state: EnemyState::Chase,
        difficulty,
        attack_cooldown: 0.0,
        flank_target: None,
        home,
        bob_phase: rng.gen_range(0.0..std::f32::consts::TAU),
        hit_flash: 0.0,
        yaw: 0.0,
    };

    world.spawn((
        Enemy { id, kind },
        Position(home),
        brain,
        Health::new(profile.health),
        Hitbox {
            radius: profile.hitbox_radius,
        },
    ))
}

/// Uniform point in the spawn square, at least `MIN_SPAWN_DISTANCE` from the player.
/// After `SPAWN_ATTEMPTS` misses the last candidate is pushed out to the minimum distance.
pub fn random_spawn_point(rng: &mut ChaCha8Rng, player_position: Vec3) -> Vec3 {
    let mut candidate = Vec3::ZERO;
    for _ in 0..SPAWN_ATTEMPTS {
        candidate = Vec3::new(
            rng.gen_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT),
            0.0,
            rng.gen_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT),
        );
        if Position(candidate).horizontal_distance_to(&Position(player_position))
            >= MIN_SPAWN_DISTANCE
        {
            return candidate;
        }
    }

    let player_flat = Vec3::new(player_position.x, 0.0, player_position.z);
    let away = (candidate - player_flat).try_normalize().unwrap_or(Vec3::X);
    player_flat + away * MIN_SPAWN_DISTANCE
}

pub fn spawn_power_up(
    world: &mut World,
    id: u32,
    kind: PowerUpKind,
    position: Vec3,
) -> hecs::Entity {
    world.spawn((
        PowerUp {
            id,
            kind,
            collected: false,
        },
        Position::new(position.x, POWER_UP_HOVER_HEIGHT, position.z),
    ))
}

/// Spray of gore particles from `point`, biased along the surface `normal`.
pub fn spawn_blood_burst(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    point: Vec3,
    normal: Vec3,
    count: u32,
) {
    for _ in 0..count {
        let mut velocity = Vec3::new(
            (rng.gen::<f32>() - 0.5) * BLOOD_SPREAD,
            rng.gen::<f32>() * BLOOD_SPREAD * 0.5,
            (rng.gen::<f32>() - 0.5) * BLOOD_SPREAD,
        );
        velocity += normal * rng.gen::<f32>() * 0.5;

        let jitter = Vec3::new(
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
        ) * 0.2;

        let life = BLOOD_LIFE_MIN_SECS + rng.gen::<f32>() * BLOOD_LIFE_RANGE_SECS;
        let size = BLOOD_SIZE_MIN + rng.gen::<f32>() * BLOOD_SIZE_RANGE;

        world.spawn((
            Effect::new(EffectKind::BloodParticle { size }, life),
            Position(point + jitter),
            Velocity(velocity),
        ));
    }
}

pub fn spawn_muzzle_flash(world: &mut World, position: Vec3) -> hecs::Entity {
    world.spawn((
        Effect::new(EffectKind::MuzzleFlash, MUZZLE_FLASH_SECS),
        Position(position),
    ))
}

/// Screen feedback for the player taking a hit: red overlay plus camera shake.
pub fn spawn_hit_feedback(world: &mut World, camera_position: Vec3) {
    world.spawn((
        Effect::new(EffectKind::DamageFlash, DAMAGE_FLASH_SECS),
        Position(camera_position),
    ));
    world.spawn((
        Effect::new(
            EffectKind::ScreenShake {
                magnitude: SCREEN_SHAKE_MAGNITUDE,
            },
            SCREEN_SHAKE_SECS,
        ),
        Position(camera_position),
    ));
}
