//! Effects system: lifetime countdown and particle physics.

use hecs::{Entity, World};

use singularity_core::components::Effect;
use singularity_core::constants::{GRAVITY, PARTICLE_DRAG, TICK_RATE};
use singularity_core::types::{Position, Velocity};

/// Age every effect by `dt` and move particles. Effects whose life reaches
/// zero are despawned in the same call.
pub fn run(world: &mut World, dt: f32, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, effect) in world.query_mut::<&mut Effect>() {
        effect.remaining_life -= dt;
        if effect.remaining_life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    // Drag is tuned per 60 Hz frame; scale it to the actual step.
    let drag = PARTICLE_DRAG.powf(TICK_RATE as f32 * dt);
    for (_entity, (_effect, pos, vel)) in
        world.query_mut::<(&Effect, &mut Position, &mut Velocity)>()
    {
        vel.0.y -= GRAVITY * dt;
        vel.0 *= drag;
        pos.0 += vel.0 * dt;
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
