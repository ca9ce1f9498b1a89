//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy variant, chosen once at spawn time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DroneKind {
    /// Always chasing, light armor, fast on long approaches.
    #[default]
    Basic,
    /// Patrols until the player enters aggro range, weaves and lunges.
    /// Scales with wave difficulty.
    Advanced,
}

/// Enemy behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    /// Circling the spawn point, player outside aggro range.
    Patrol,
    /// Moving straight at the player.
    #[default]
    Chase,
    /// Moving to a lateral point beside the player.
    Flank,
    /// Within attack range, hitting the player whenever the cooldown allows.
    Attack,
    /// Health reached zero. Terminal.
    Dead,
}

/// Power-up variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    Health,
    Shield,
    Damage,
    Speed,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Health,
        PowerUpKind::Shield,
        PowerUpKind::Damage,
        PowerUpKind::Speed,
    ];
}

/// Visual effect variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectKind {
    /// Gore particle, affected by gravity and drag.
    BloodParticle { size: f32 },
    /// Light at the gun barrel right after a shot.
    MuzzleFlash,
    /// Camera shake while the player is being hit.
    ScreenShake { magnitude: f32 },
    /// Red full-screen overlay after taking damage.
    DamageFlash,
}

/// How damage that exceeds the remaining shield is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShieldOverflow {
    /// The shield soaks the whole hit, even if it breaks.
    #[default]
    Absorb,
    /// The part the shield could not soak hits health in the same hit.
    CarryOver,
}

/// Keyboard keys the game reacts to (DOM `KeyboardEvent.code` names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    /// Manual reload.
    KeyR,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to lock the pointer.
    #[default]
    Ready,
    Active,
    Paused,
    /// Player health reached zero.
    GameOver,
}
