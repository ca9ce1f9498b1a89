//! Events emitted by the simulation for audio feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Fire-and-forget sound requests for the host's audio system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A round left the barrel.
    Gunshot { volume: f32 },
    /// An enemy was destroyed.
    EnemyDeath { position: Vec3, volume: f32 },
    /// An enemy landed an attack on the player.
    PlayerHit { volume: f32 },
    PowerUpCollected { kind: PowerUpKind, volume: f32 },
    /// The reload timer started.
    Reload { volume: f32 },
}
