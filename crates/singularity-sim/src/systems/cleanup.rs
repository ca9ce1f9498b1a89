//! Cleanup system: removes dead enemies and collected power-ups.

use hecs::{Entity, World};

use singularity_core::components::{EnemyBrain, PowerUp};
use singularity_core::enums::EnemyState;

/// Despawn terminal entities. Uses a caller-owned buffer to avoid per-frame allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, brain) in world.query_mut::<&EnemyBrain>() {
        if brain.state == EnemyState::Dead {
            despawn_buffer.push(entity);
        }
    }

    for (entity, power_up) in world.query_mut::<&PowerUp>() {
        if power_up.collected {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
