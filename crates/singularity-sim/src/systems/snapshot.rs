//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use singularity_core::components::*;
use singularity_core::enums::*;
use singularity_core::events::AudioEvent;
use singularity_core::state::*;
use singularity_core::types::{Position, SimTime};

use crate::player::{boost_remaining, Player};
use crate::systems::wave_spawner::WaveController;

/// Build a complete GameStateSnapshot from the current world and player state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    player: &Player,
    waves: &WaveController,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    let enemies = build_enemies(world);
    let effects = build_effects(world);
    let enemies_left = enemies
        .iter()
        .filter(|e| e.state != EnemyState::Dead)
        .count() as u32;

    GameStateSnapshot {
        time: *time,
        phase,
        hud: build_hud(player, waves, time.elapsed_secs, enemies_left, &effects),
        score: ScoreView {
            score: player.score.score,
            kills: player.score.kills,
            shots_fired: player.score.shots_fired,
            shots_hit: player.score.shots_hit,
            waves_cleared: player.score.waves_cleared,
        },
        camera: CameraView {
            position: player.camera.position,
            yaw: player.camera.yaw,
            pitch: player.aim_pitch(),
        },
        enemies,
        power_ups: build_power_ups(world),
        effects,
        audio_events,
    }
}

fn build_hud(
    player: &Player,
    waves: &WaveController,
    now: f32,
    enemies_left: u32,
    effects: &[EffectView],
) -> HudView {
    let active = |pred: fn(&EffectKind) -> bool| effects.iter().any(|e| pred(&e.kind));

    HudView {
        health: player.vitals.health,
        max_health: player.vitals.max_health,
        shield: player.vitals.shield,
        max_shield: player.vitals.max_shield,
        ammo: player.weapon.ammo,
        max_ammo: player.weapon.max_ammo,
        score: player.score.score,
        wave: waves.wave,
        enemies_left,
        reloading: player.weapon.is_reloading(),
        screen_shake: active(|k| matches!(k, EffectKind::ScreenShake { .. })),
        damage_flash: active(|k| matches!(k, EffectKind::DamageFlash)),
        muzzle_flash: active(|k| matches!(k, EffectKind::MuzzleFlash)),
        damage_boost: boost_remaining(player.boosts.damage, now),
        speed_boost: boost_remaining(player.boosts.speed, now),
    }
}

/// Enemies sorted by id so snapshots are stable across runs.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &EnemyBrain, &Health)>()
        .iter()
        .map(|(_, (enemy, pos, brain, health))| EnemyView {
            id: enemy.id,
            kind: enemy.kind,
            state: brain.state,
            position: pos.0,
            yaw: brain.yaw,
            health_ratio: health.ratio(),
            hit_flash: brain.hit_flash > 0.0,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_power_ups(world: &World) -> Vec<PowerUpView> {
    let mut power_ups: Vec<PowerUpView> = world
        .query::<(&PowerUp, &Position)>()
        .iter()
        .filter(|(_, (power_up, _))| !power_up.collected)
        .map(|(_, (power_up, pos))| PowerUpView {
            id: power_up.id,
            kind: power_up.kind,
            position: pos.0,
        })
        .collect();
    power_ups.sort_by_key(|p| p.id);
    power_ups
}

fn build_effects(world: &World) -> Vec<EffectView> {
    world
        .query::<(&Effect, &Position)>()
        .iter()
        .map(|(_, (effect, pos))| EffectView {
            kind: effect.kind,
            position: pos.0,
            life_ratio: effect.life_ratio(),
        })
        .collect()
}
