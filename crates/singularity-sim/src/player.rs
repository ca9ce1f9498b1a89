//! Player state: camera, vitals, weapon, boosts and score.
//!
//! Stored on `GameEngine` directly, not as an ECS entity. There is exactly
//! one player per session and every system that needs it gets it passed in.

use glam::Vec3;

use singularity_core::config::GameConfig;
use singularity_core::constants::{ARENA_HALF_EXTENT, PITCH_LIMIT, PLAYER_EYE_HEIGHT};
use singularity_core::enums::ShieldOverflow;

use crate::weapon::Weapon;

/// First-person camera. Yaw 0 looks down -Z; positive pitch looks up.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        view_direction(self.yaw, self.pitch)
    }

    /// View direction projected onto the ground plane.
    pub fn flat_forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    pub fn flat_right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Turn by mouse deltas already scaled to radians.
    /// Positive `d_yaw` turns right, positive `d_pitch` looks down.
    /// Non-finite deltas are ignored.
    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        if !(d_yaw.is_finite() && d_pitch.is_finite()) {
            return;
        }
        self.yaw = (self.yaw - d_yaw).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch - d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Move on the ground plane, staying inside the arena.
    pub fn translate_flat(&mut self, offset: Vec3) {
        self.position.x = (self.position.x + offset.x).clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);
        self.position.z = (self.position.z + offset.z).clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);
    }
}

fn view_direction(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
}

/// Health and shield, both clamped to [0, max] by every mutator.
#[derive(Debug, Clone, PartialEq)]
pub struct Vitals {
    pub health: f32,
    pub max_health: f32,
    pub shield: f32,
    pub max_shield: f32,
}

impl Vitals {
    pub fn new(max_health: f32, max_shield: f32) -> Self {
        Self {
            health: max_health,
            max_health,
            shield: max_shield,
            max_shield,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Apply an incoming hit. The shield absorbs first while it has any charge.
    pub fn take_damage(&mut self, amount: f32, overflow: ShieldOverflow) {
        let amount = amount.max(0.0);
        if self.shield > 0.0 {
            let leftover = amount - self.shield;
            self.shield = (self.shield - amount).max(0.0);
            if overflow == ShieldOverflow::CarryOver && leftover > 0.0 {
                self.health = (self.health - leftover).max(0.0);
            }
        } else {
            self.health = (self.health - amount).max(0.0);
        }
    }

    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount.max(0.0)).min(self.max_health);
    }

    pub fn recharge_shield(&mut self, amount: f32) {
        self.shield = (self.shield + amount.max(0.0)).min(self.max_shield);
    }
}

/// A temporary multiplier that lapses at an absolute sim time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveBoost {
    pub multiplier: f32,
    pub expires_at_secs: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boosts {
    pub damage: Option<ActiveBoost>,
    pub speed: Option<ActiveBoost>,
}

impl Boosts {
    pub fn damage_multiplier(&self, now: f32) -> f32 {
        multiplier(self.damage, now)
    }

    pub fn speed_multiplier(&self, now: f32) -> f32 {
        multiplier(self.speed, now)
    }

    /// Drop boosts whose expiry has passed.
    pub fn expire(&mut self, now: f32) {
        if self.damage.is_some_and(|b| b.expires_at_secs <= now) {
            self.damage = None;
        }
        if self.speed.is_some_and(|b| b.expires_at_secs <= now) {
            self.speed = None;
        }
    }
}

fn multiplier(boost: Option<ActiveBoost>, now: f32) -> f32 {
    match boost {
        Some(b) if b.expires_at_secs > now => b.multiplier,
        _ => 1.0,
    }
}

/// Seconds left on a boost, for the HUD.
pub fn boost_remaining(boost: Option<ActiveBoost>, now: f32) -> Option<f32> {
    boost
        .map(|b| b.expires_at_secs - now)
        .filter(|remaining| *remaining > 0.0)
}

/// Running score. Every counter only goes up within a session and
/// saturates at `u32::MAX`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreState {
    pub score: u32,
    pub kills: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub waves_cleared: u32,
}

impl ScoreState {
    pub fn record_shot(&mut self) {
        self.shots_fired = self.shots_fired.saturating_add(1);
    }

    pub fn record_hit(&mut self) {
        self.shots_hit = self.shots_hit.saturating_add(1);
    }

    pub fn record_kill(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.kills = self.kills.saturating_add(1);
    }

    pub fn record_wave_cleared(&mut self) {
        self.waves_cleared = self.waves_cleared.saturating_add(1);
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub camera: Camera,
    pub vitals: Vitals,
    pub weapon: Weapon,
    pub boosts: Boosts,
    pub score: ScoreState,
}

impl Player {
    /// Camera pitch with the weapon's recoil kick, kept inside the pitch limit.
    pub fn aim_pitch(&self) -> f32 {
        (self.camera.pitch + self.weapon.recoil).clamp(-PITCH_LIMIT, PITCH_LIMIT)
    }

    /// Direction a shot without an explicit aim travels: the view direction
    /// raised by the current recoil.
    pub fn aim_direction(&self) -> Vec3 {
        view_direction(self.camera.yaw, self.aim_pitch())
    }

    /// Fresh player at the arena center, eye height above the floor.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            camera: Camera::new(Vec3::new(0.0, PLAYER_EYE_HEIGHT, 0.0)),
            vitals: Vitals::new(config.player.max_health, config.player.max_shield),
            weapon: Weapon::new(config.weapon.max_ammo),
            boosts: Boosts::default(),
            score: ScoreState::default(),
        }
    }
}
