//! Game state snapshot: the complete visible state handed to the host after each frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::SimTime;

/// Complete game state produced after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub score: ScoreView,
    pub camera: CameraView,
    pub enemies: Vec<EnemyView>,
    pub power_ups: Vec<PowerUpView>,
    pub effects: Vec<EffectView>,
    pub audio_events: Vec<AudioEvent>,
}

/// Everything the on-screen indicators show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub health: f32,
    pub max_health: f32,
    pub shield: f32,
    pub max_shield: f32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub score: u32,
    pub wave: u32,
    pub enemies_left: u32,
    pub reloading: bool,
    pub screen_shake: bool,
    pub damage_flash: bool,
    pub muzzle_flash: bool,
    /// Seconds left on the damage boost, if active.
    pub damage_boost: Option<f32>,
    /// Seconds left on the speed boost, if active.
    pub speed_boost: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub kills: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub waves_cleared: u32,
}

/// Camera transform for the renderer. Pitch includes recoil, clamped to the pitch limit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: DroneKind,
    pub state: EnemyState,
    pub position: Vec3,
    pub yaw: f32,
    /// Health fraction for the overhead bar.
    pub health_ratio: f32,
    /// Currently flashing from a hit.
    pub hit_flash: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUpView {
    pub id: u32,
    pub kind: PowerUpKind,
    pub position: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: EffectKind,
    pub position: Vec3,
    /// 1.0 when fresh, falling to 0.0; drives fading and shrinking.
    pub life_ratio: f32,
}
