//! Power-up pickup: proximity check against the player and boost application.

use hecs::World;
use log::debug;

use singularity_core::components::PowerUp;
use singularity_core::constants::*;
use singularity_core::enums::PowerUpKind;
use singularity_core::events::AudioEvent;
use singularity_core::types::Position;

use crate::player::{ActiveBoost, Player};

/// Collect every uncollected power-up within pickup radius of the player.
pub fn run(world: &mut World, player: &mut Player, now: f32, audio_events: &mut Vec<AudioEvent>) {
    let player_position = Position(player.camera.position);

    for (_entity, (power_up, pos)) in world.query_mut::<(&mut PowerUp, &Position)>() {
        if power_up.collected {
            continue;
        }
        if pos.horizontal_distance_to(&player_position) > POWER_UP_PICKUP_RADIUS {
            continue;
        }

        power_up.collected = true;
        apply(player, power_up.kind, now);
        audio_events.push(AudioEvent::PowerUpCollected {
            kind: power_up.kind,
            volume: POWER_UP_VOLUME,
        });
        debug!("collected {:?} power-up {}", power_up.kind, power_up.id);
    }
}

/// Apply a power-up's effect. Collecting an active boost again refreshes its expiry.
pub fn apply(player: &mut Player, kind: PowerUpKind, now: f32) {
    let expires_at_secs = now + BOOST_DURATION_SECS;
    match kind {
        PowerUpKind::Health => player.vitals.heal(POWER_UP_HEALTH_AMOUNT),
        PowerUpKind::Shield => player.vitals.recharge_shield(POWER_UP_SHIELD_AMOUNT),
        PowerUpKind::Damage => {
            player.boosts.damage = Some(ActiveBoost {
                multiplier: DAMAGE_BOOST_MULTIPLIER,
                expires_at_secs,
            });
        }
        PowerUpKind::Speed => {
            player.boosts.speed = Some(ActiveBoost {
                multiplier: SPEED_BOOST_MULTIPLIER,
                expires_at_secs,
            });
        }
    }
}
