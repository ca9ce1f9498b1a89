//! Kind-specific behavioral profiles.
//!
//! Consolidates per-kind parameters for the enemy FSM. Advanced drones
//! scale with the wave difficulty they were spawned at.

use singularity_core::enums::DroneKind;

/// Behavioral profile for a drone kind at a given difficulty.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneProfile {
    /// Spawn health.
    pub health: u32,
    /// Chase speed when close to the player (m/s).
    pub speed: f32,
    /// Chase speed beyond `sprint_range`, if the kind sprints.
    pub sprint_speed: Option<f32>,
    pub sprint_range: f32,
    /// Beyond this distance the drone patrols instead of chasing.
    pub aggro_range: f32,
    pub attack_range: f32,
    /// Seconds between attacks.
    pub attack_cooldown: f32,
    pub attack_damage: f32,
    pub hitbox_radius: f32,
    pub hover_height: f32,
    pub bob_amplitude: f32,
    pub patrol_radius: f32,
    /// Distance jumped toward the player on a landed attack.
    pub lunge: f32,
    /// Sideways weave mixed into the chase direction.
    pub evasion: f32,
    /// Chance per second of breaking off a chase to flank.
    pub flank_chance_per_sec: f32,
}

/// Get the behavioral profile for a drone kind.
pub fn get_profile(kind: DroneKind, difficulty: f32) -> DroneProfile {
    use singularity_core::constants::*;

    let difficulty = difficulty.max(1.0);

    match kind {
        DroneKind::Basic => DroneProfile {
            health: BASIC_DRONE_HEALTH,
            speed: BASIC_DRONE_SPEED_NEAR,
            sprint_speed: Some(BASIC_DRONE_SPEED_FAR),
            sprint_range: BASIC_DRONE_SPRINT_RANGE,
            aggro_range: f32::INFINITY,
            attack_range: BASIC_DRONE_ATTACK_RANGE,
            attack_cooldown: BASIC_DRONE_ATTACK_COOLDOWN_SECS / difficulty,
            attack_damage: BASIC_DRONE_DAMAGE,
            hitbox_radius: BASIC_DRONE_RADIUS,
            hover_height: BASIC_DRONE_HOVER_HEIGHT,
            bob_amplitude: 0.0,
            patrol_radius: 0.0,
            lunge: 0.0,
            evasion: 0.0,
            flank_chance_per_sec: BASIC_DRONE_FLANK_CHANCE_PER_SEC,
        },
        DroneKind::Advanced => DroneProfile {
            health: (ADVANCED_DRONE_BASE_HEALTH as f32 * difficulty).round() as u32,
            speed: ADVANCED_DRONE_BASE_SPEED + ADVANCED_DRONE_SPEED_PER_DIFFICULTY * difficulty,
            sprint_speed: None,
            sprint_range: 0.0,
            aggro_range: ADVANCED_DRONE_AGGRO_PER_DIFFICULTY * difficulty,
            attack_range: ADVANCED_DRONE_ATTACK_RANGE,
            attack_cooldown: ADVANCED_DRONE_ATTACK_COOLDOWN_SECS / difficulty,
            attack_damage: ADVANCED_DRONE_DAMAGE,
            hitbox_radius: ADVANCED_DRONE_RADIUS,
            hover_height: ADVANCED_DRONE_HOVER_HEIGHT,
            bob_amplitude: ADVANCED_DRONE_BOB_AMPLITUDE,
            patrol_radius: ADVANCED_DRONE_PATROL_RADIUS,
            lunge: ADVANCED_DRONE_LUNGE,
            evasion: ADVANCED_DRONE_EVASION,
            flank_chance_per_sec: ADVANCED_DRONE_FLANK_CHANCE_PER_SEC,
        },
    }
}

impl DroneProfile {
    /// Chase speed at the given distance from the player.
    pub fn chase_speed(&self, distance: f32) -> f32 {
        match self.sprint_speed {
            Some(sprint) if distance > self.sprint_range => sprint,
            _ => self.speed,
        }
    }
}
