//! Wave spawning system: starts the next wave once the enemy pool is empty.

use glam::Vec3;
use hecs::World;
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use singularity_core::components::Enemy;
use singularity_core::config::WaveConfig;
use singularity_core::constants::{WAVE_ADVANCED_CHANCE_MAX, WAVE_ADVANCED_CHANCE_STEP};
use singularity_core::enums::{DroneKind, PowerUpKind};

use crate::player::ScoreState;
use crate::world_setup;

/// Wave counter and id allocators for spawned entities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaveController {
    /// Number of the wave currently in play (0 before the first spawn).
    pub wave: u32,
    pub next_enemy_id: u32,
    pub next_power_up_id: u32,
}

/// Probability that an enemy in `wave` is an advanced drone.
pub fn advanced_chance(wave: u32) -> f32 {
    (WAVE_ADVANCED_CHANCE_STEP * wave.saturating_sub(1) as f32).min(WAVE_ADVANCED_CHANCE_MAX)
}

/// Spawn the next wave if no enemy entity is left. Returns true when a wave spawned.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    controller: &mut WaveController,
    config: &WaveConfig,
    player_position: Vec3,
    score: &mut ScoreState,
) -> bool {
    if world.query::<&Enemy>().iter().next().is_some() {
        return false;
    }

    if controller.wave > 0 {
        score.record_wave_cleared();
    }
    controller.wave += 1;
    let wave = controller.wave;

    let count = config.enemy_count(wave);
    let difficulty = config.difficulty(wave);
    let chance = advanced_chance(wave);

    let mut advanced = 0;
    for _ in 0..count {
        let kind = if rng.gen::<f32>() < chance {
            advanced += 1;
            DroneKind::Advanced
        } else {
            DroneKind::Basic
        };
        let position = world_setup::random_spawn_point(rng, player_position);
        let id = controller.next_enemy_id;
        controller.next_enemy_id += 1;
        world_setup::spawn_enemy(world, rng, id, kind, position, difficulty);
    }
    debug!("wave {wave}: {count} drones ({advanced} advanced), difficulty {difficulty:.2}");

    if config.spawns_power_up(wave) {
        let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
        let position = world_setup::random_spawn_point(rng, player_position);
        let id = controller.next_power_up_id;
        controller.next_power_up_id += 1;
        world_setup::spawn_power_up(world, id, kind, position);
        debug!("wave {wave}: spawned {kind:?} power-up at ({:.1}, {:.1})", position.x, position.z);
    }

    true
}
