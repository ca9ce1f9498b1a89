//! Run-time tunables.
//!
//! Every field has a default taken from `constants`, so a config file only
//! needs to list what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::ShieldOverflow;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. Same seed and same inputs give the same game.
    pub seed: u64,
    /// Frame deltas are clamped to this many seconds.
    pub max_frame_delta: f32,
    pub player: PlayerConfig,
    pub weapon: WeaponConfig,
    pub waves: WaveConfig,
    pub combat: CombatConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_health: f32,
    pub max_shield: f32,
    pub shield_regen_per_sec: f32,
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub max_ammo: u32,
    pub fire_cooldown_secs: f32,
    pub damage: u32,
    pub reload_delay_secs: f32,
    pub range: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub base_enemies: u32,
    pub enemies_per_wave: u32,
    pub max_enemies: u32,
    pub difficulty_step: f32,
    pub max_difficulty: f32,
    /// A power-up spawns every this many waves. 0 disables power-ups.
    pub power_up_every: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub shield_overflow: ShieldOverflow,
    pub kill_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_frame_delta: MAX_FRAME_DELTA,
            player: PlayerConfig::default(),
            weapon: WeaponConfig::default(),
            waves: WaveConfig::default(),
            combat: CombatConfig::default(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: PLAYER_MAX_HEALTH,
            max_shield: PLAYER_MAX_SHIELD,
            shield_regen_per_sec: SHIELD_REGEN_PER_SEC,
            move_speed: PLAYER_MOVE_SPEED,
            mouse_sensitivity: MOUSE_SENSITIVITY,
        }
    }
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            max_ammo: WEAPON_MAX_AMMO,
            fire_cooldown_secs: WEAPON_FIRE_COOLDOWN_SECS,
            damage: WEAPON_DAMAGE,
            reload_delay_secs: WEAPON_RELOAD_DELAY_SECS,
            range: WEAPON_RANGE,
        }
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            base_enemies: WAVE_BASE_ENEMIES,
            enemies_per_wave: WAVE_ENEMIES_PER_WAVE,
            max_enemies: WAVE_MAX_ENEMIES,
            difficulty_step: WAVE_DIFFICULTY_STEP,
            max_difficulty: WAVE_MAX_DIFFICULTY,
            power_up_every: WAVE_POWER_UP_EVERY,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            shield_overflow: ShieldOverflow::default(),
            kill_score: KILL_SCORE,
        }
    }
}

impl WaveConfig {
    /// Enemies spawned for a 1-based wave number, capped at `max_enemies`.
    pub fn enemy_count(&self, wave: u32) -> u32 {
        self.base_enemies
            .saturating_add(self.enemies_per_wave.saturating_mul(wave))
            .min(self.max_enemies)
    }

    /// Difficulty multiplier for a 1-based wave number, capped at `max_difficulty`.
    pub fn difficulty(&self, wave: u32) -> f32 {
        let steps = wave.saturating_sub(1) as f32;
        (1.0 + self.difficulty_step * steps).min(self.max_difficulty)
    }

    /// Whether the given wave also spawns a power-up.
    pub fn spawns_power_up(&self, wave: u32) -> bool {
        self.power_up_every > 0 && wave > 0 && wave % self.power_up_every == 0
    }
}

impl GameConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("max_frame_delta", self.max_frame_delta)?;
        positive("player.max_health", self.player.max_health)?;
        non_negative("player.max_shield", self.player.max_shield)?;
        non_negative("player.shield_regen_per_sec", self.player.shield_regen_per_sec)?;
        non_negative("player.move_speed", self.player.move_speed)?;
        non_negative("player.mouse_sensitivity", self.player.mouse_sensitivity)?;
        if self.weapon.max_ammo == 0 {
            return Err(invalid("weapon.max_ammo", "must be at least 1"));
        }
        non_negative("weapon.fire_cooldown_secs", self.weapon.fire_cooldown_secs)?;
        non_negative("weapon.reload_delay_secs", self.weapon.reload_delay_secs)?;
        positive("weapon.range", self.weapon.range)?;
        if self.waves.max_enemies == 0 {
            return Err(invalid("waves.max_enemies", "must be at least 1"));
        }
        if self.waves.base_enemies == 0 && self.waves.enemies_per_wave == 0 {
            return Err(invalid(
                "waves.base_enemies",
                "waves would be empty with enemies_per_wave = 0",
            ));
        }
        non_negative("waves.difficulty_step", self.waves.difficulty_step)?;
        if self.waves.max_difficulty.is_nan() || self.waves.max_difficulty < 1.0 {
            return Err(invalid("waves.max_difficulty", "must be at least 1.0"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be a positive number, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be zero or more, got {value}")))
    }
}
