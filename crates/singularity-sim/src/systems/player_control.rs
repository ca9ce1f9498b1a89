//! Player update: weapon timers, shield regeneration, boost expiry and
//! WASD movement on the ground plane.

use singularity_core::config::PlayerConfig;

use crate::input::InputState;
use crate::player::Player;

/// Advance the player by one frame of `dt` seconds at sim time `now`.
pub fn run(player: &mut Player, input: &InputState, config: &PlayerConfig, now: f32, dt: f32) {
    player.weapon.update(dt);
    player
        .vitals
        .recharge_shield(config.shield_regen_per_sec * dt);
    player.boosts.expire(now);

    let (forward, right) = input.movement_axes();
    let direction = player.camera.flat_forward() * forward + player.camera.flat_right() * right;
    let Some(direction) = direction.try_normalize() else {
        return;
    };
    let speed = config.move_speed * player.boosts.speed_multiplier(now);
    player.camera.translate_flat(direction * speed * dt);
}
