//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Behavior lives in systems and in the AI crate.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Marks an entity as part of the enemy pool.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable id, unique within a session.
    pub id: u32,
    pub kind: DroneKind,
}

/// Per-enemy AI state and timers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyBrain {
    pub state: EnemyState,
    /// Difficulty multiplier fixed at spawn.
    pub difficulty: f32,
    /// Seconds until the next attack is allowed.
    pub attack_cooldown: f32,
    /// Lateral point chosen when entering Flank.
    pub flank_target: Option<Vec3>,
    /// Spawn point, center of the patrol circle.
    pub home: Vec3,
    /// Phase offset for patrol and hover bob, randomized per enemy.
    pub bob_phase: f32,
    /// Seconds of red flash left after being hit.
    pub hit_flash: f32,
    /// Facing around the Y axis (radians), toward the player.
    pub yaw: f32,
}

/// Integer hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Fraction of health left, 0.0 to 1.0.
    pub fn ratio(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }
}

/// Spherical hit volume used by the ray test.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub radius: f32,
}

/// A collectible power-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub collected: bool,
}

/// A short-lived visual artifact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    /// Seconds left before removal.
    pub remaining_life: f32,
    /// Lifetime at spawn, used for fading.
    pub max_life: f32,
}

impl Effect {
    pub fn new(kind: EffectKind, life: f32) -> Self {
        Self {
            kind,
            remaining_life: life,
            max_life: life,
        }
    }

    /// Remaining life as a fraction of the starting life.
    pub fn life_ratio(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.remaining_life / self.max_life).clamp(0.0, 1.0)
    }
}
