//! Enemy AI system: updates drone behavior each frame.
//!
//! Calls the drone FSM from singularity-ai, writes the resulting state and
//! transform back to the components, then applies landed attacks to the player.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use singularity_core::components::{Enemy, EnemyBrain};
use singularity_core::constants::PLAYER_HIT_VOLUME;
use singularity_core::enums::{EnemyState, ShieldOverflow};
use singularity_core::events::AudioEvent;
use singularity_core::types::Position;

use singularity_ai::fsm::{evaluate, EnemyContext, EnemyRolls};
use singularity_ai::profiles::get_profile;

use crate::player::Player;
use crate::world_setup;

/// Run the enemy AI for every live drone. Returns the number of attacks that landed.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: &mut Player,
    overflow: ShieldOverflow,
    now: f32,
    dt: f32,
    audio_events: &mut Vec<AudioEvent>,
) -> usize {
    let player_position = player.camera.position;
    // Damage from attacks that landed, applied after the query borrow ends.
    let mut landed: Vec<f32> = Vec::new();

    for (_entity, (enemy, pos, brain)) in
        world.query_mut::<(&Enemy, &mut Position, &mut EnemyBrain)>()
    {
        if brain.state == EnemyState::Dead {
            continue;
        }

        brain.attack_cooldown = (brain.attack_cooldown - dt).max(0.0);
        brain.hit_flash = (brain.hit_flash - dt).max(0.0);

        let rolls = EnemyRolls {
            flank: rng.gen(),
            side: rng.gen(),
        };
        let ctx = EnemyContext {
            kind: enemy.kind,
            state: brain.state,
            position: pos.0,
            home: brain.home,
            player_position,
            flank_target: brain.flank_target,
            difficulty: brain.difficulty,
            attack_ready: brain.attack_cooldown <= 0.0,
            elapsed_secs: now,
            bob_phase: brain.bob_phase,
            dt,
        };

        let update = evaluate(&ctx, rolls);
        brain.state = update.new_state;
        brain.flank_target = update.flank_target;
        brain.yaw = update.yaw;
        pos.0 = update.new_position;

        if let Some(damage) = update.attack_damage {
            brain.attack_cooldown = get_profile(enemy.kind, brain.difficulty).attack_cooldown;
            landed.push(damage);
        }
    }

    for &damage in &landed {
        player.vitals.take_damage(damage, overflow);
        hit_feedback(world, player.camera.position, audio_events);
    }
    landed.len()
}

fn hit_feedback(world: &mut World, camera_position: Vec3, audio_events: &mut Vec<AudioEvent>) {
    world_setup::spawn_hit_feedback(world, camera_position);
    audio_events.push(AudioEvent::PlayerHit {
        volume: PLAYER_HIT_VOLUME,
    });
}
