//! Firing system: cooldown-gated hit-scan shots from the player viewpoint.
//!
//! A shot spends ammo, triggers muzzle/audio feedback, then casts a ray
//! through the `SceneQuery` seam and applies damage to the nearest live enemy.

use glam::Vec3;
use hecs::{Entity, World};
use log::trace;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use singularity_core::components::{Enemy, EnemyBrain, Health};
use singularity_core::config::GameConfig;
use singularity_core::constants::*;
use singularity_core::enums::EnemyState;
use singularity_core::events::AudioEvent;
use singularity_core::types::{Position, Ray};

use crate::player::{Player, ScoreState};
use crate::raycast::{HitboxScene, SceneQuery};
use crate::world_setup;

/// Result of a single trigger pull.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotOutcome {
    /// Cooldown, empty magazine or reload prevented the shot. Nothing changed.
    Blocked,
    /// The round was spent but hit nothing targetable.
    Miss,
    Hit { entity: Entity, damage: u32 },
    /// The hit took the enemy's health to zero.
    Kill { entity: Entity },
}

/// Fire one round along `direction`. When it is `None` or zero the shot follows
/// the recoil-kicked view direction at the moment the trigger is pulled.
pub fn fire(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: &mut Player,
    config: &GameConfig,
    direction: Option<Vec3>,
    now: f32,
    audio_events: &mut Vec<AudioEvent>,
) -> ShotOutcome {
    if !player.weapon.try_fire(&config.weapon) {
        return ShotOutcome::Blocked;
    }

    player.score.record_shot();
    audio_events.push(AudioEvent::Gunshot {
        volume: GUNSHOT_VOLUME,
    });
    if player.weapon.is_reloading() {
        audio_events.push(AudioEvent::Reload {
            volume: RELOAD_VOLUME,
        });
    }
    let origin = player.camera.position;
    let forward = player.aim_direction();
    player
        .weapon
        .kick(RECOIL_KICK + rng.gen_range(0.0..RECOIL_JITTER));
    world_setup::spawn_muzzle_flash(world, origin + forward * MUZZLE_OFFSET);

    let Some(ray) = direction
        .and_then(|d| Ray::new(origin, d))
        .or_else(|| Ray::new(origin, forward))
    else {
        return ShotOutcome::Miss;
    };

    let Some(hit) = HitboxScene::new(world).cast_ray(&ray, config.weapon.range) else {
        return ShotOutcome::Miss;
    };

    player.score.record_hit();
    let damage =
        (config.weapon.damage as f32 * player.boosts.damage_multiplier(now)).round() as u32;
    world_setup::spawn_blood_burst(world, rng, hit.point, hit.normal, BLOOD_HIT_PARTICLES);

    apply_damage(
        world,
        rng,
        hit.entity,
        damage,
        &mut player.score,
        config.combat.kill_score,
        audio_events,
    )
}

/// Damage one enemy. The transition to Dead happens at most once per enemy:
/// a Dead or missing entity is left untouched and reported as a miss.
pub fn apply_damage(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    entity: Entity,
    damage: u32,
    score: &mut ScoreState,
    kill_score: u32,
    audio_events: &mut Vec<AudioEvent>,
) -> ShotOutcome {
    let (id, position) = {
        let Ok((enemy, health, brain, pos)) =
            world.query_one_mut::<(&Enemy, &mut Health, &mut EnemyBrain, &Position)>(entity)
        else {
            return ShotOutcome::Miss;
        };
        if brain.state == EnemyState::Dead {
            return ShotOutcome::Miss;
        }

        health.current = health.current.saturating_sub(damage);
        brain.hit_flash = ENEMY_HIT_FLASH_SECS;
        if !health.is_depleted() {
            return ShotOutcome::Hit { entity, damage };
        }
        brain.state = EnemyState::Dead;
        (enemy.id, pos.0)
    };

    score.record_kill(kill_score);
    world_setup::spawn_blood_burst(world, rng, position, Vec3::Y, BLOOD_DEATH_PARTICLES);
    audio_events.push(AudioEvent::EnemyDeath {
        position,
        volume: ENEMY_DEATH_VOLUME,
    });
    trace!("drone {id} destroyed, score {}", score.score);

    ShotOutcome::Kill { entity }
}
