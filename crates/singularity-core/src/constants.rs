//! Simulation constants and tuning parameters.
//!
//! Values marked as defaults seed `GameConfig`; the rest are fixed.

/// Frame rate the demo loop paces itself at (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per frame at the nominal rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Default upper bound on a single frame delta (seconds).
pub const MAX_FRAME_DELTA: f32 = 0.05;

// --- Arena ---

/// Player movement is clamped to +/- this on X and Z.
pub const ARENA_HALF_EXTENT: f32 = 50.0;

/// Enemies and power-ups spawn within +/- this on X and Z.
pub const SPAWN_HALF_EXTENT: f32 = 30.0;

/// Minimum spawn distance from the player (horizontal).
pub const MIN_SPAWN_DISTANCE: f32 = 8.0;

/// Attempts to find a spawn point clear of the player before giving up.
pub const SPAWN_ATTEMPTS: u32 = 16;

// --- Player ---

pub const PLAYER_EYE_HEIGHT: f32 = 1.6;
pub const PLAYER_MAX_HEALTH: f32 = 100.0;
pub const PLAYER_MAX_SHIELD: f32 = 50.0;
pub const SHIELD_REGEN_PER_SEC: f32 = 5.0;
pub const PLAYER_MOVE_SPEED: f32 = 6.0;

/// Radians of rotation per pixel of mouse movement.
pub const MOUSE_SENSITIVITY: f32 = 0.002;

/// Pitch stays short of straight up/down.
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Seconds the red overlay stays up after a hit.
pub const DAMAGE_FLASH_SECS: f32 = 0.15;
pub const SCREEN_SHAKE_SECS: f32 = 0.2;
pub const SCREEN_SHAKE_MAGNITUDE: f32 = 0.05;

// --- Weapon ---

pub const WEAPON_MAX_AMMO: u32 = 30;
pub const WEAPON_FIRE_COOLDOWN_SECS: f32 = 0.12;
pub const WEAPON_DAMAGE: u32 = 18;
pub const WEAPON_RELOAD_DELAY_SECS: f32 = 1.5;
pub const WEAPON_RANGE: f32 = 100.0;
pub const MUZZLE_FLASH_SECS: f32 = 0.05;

/// Muzzle flash sits this far ahead of the eye.
pub const MUZZLE_OFFSET: f32 = 0.5;

/// Base upward camera kick per shot (radians) plus random jitter on top.
pub const RECOIL_KICK: f32 = 0.02;
pub const RECOIL_JITTER: f32 = 0.01;

/// Recoil recovery rate (radians per second).
pub const RECOIL_RECOVERY_PER_SEC: f32 = 0.3;

// --- Enemies ---

pub const BASIC_DRONE_HEALTH: u32 = 30;
pub const BASIC_DRONE_SPEED_FAR: f32 = 2.5;
pub const BASIC_DRONE_SPEED_NEAR: f32 = 1.2;
/// Beyond this distance basic drones use their far speed.
pub const BASIC_DRONE_SPRINT_RANGE: f32 = 10.0;
pub const BASIC_DRONE_ATTACK_RANGE: f32 = 2.0;
pub const BASIC_DRONE_ATTACK_COOLDOWN_SECS: f32 = 0.8;
pub const BASIC_DRONE_DAMAGE: f32 = 12.0;
pub const BASIC_DRONE_RADIUS: f32 = 0.5;
pub const BASIC_DRONE_HOVER_HEIGHT: f32 = 1.2;
pub const BASIC_DRONE_FLANK_CHANCE_PER_SEC: f32 = 0.1;

pub const ADVANCED_DRONE_BASE_HEALTH: u32 = 100;
/// Speed is base + per-difficulty term.
pub const ADVANCED_DRONE_BASE_SPEED: f32 = 1.8;
pub const ADVANCED_DRONE_SPEED_PER_DIFFICULTY: f32 = 0.6;
pub const ADVANCED_DRONE_AGGRO_PER_DIFFICULTY: f32 = 15.0;
pub const ADVANCED_DRONE_ATTACK_RANGE: f32 = 2.5;
/// Divided by difficulty.
pub const ADVANCED_DRONE_ATTACK_COOLDOWN_SECS: f32 = 1.0;
pub const ADVANCED_DRONE_DAMAGE: f32 = 10.0;
pub const ADVANCED_DRONE_RADIUS: f32 = 0.5;
pub const ADVANCED_DRONE_HOVER_HEIGHT: f32 = 1.0;
pub const ADVANCED_DRONE_BOB_AMPLITUDE: f32 = 0.3;
pub const ADVANCED_DRONE_PATROL_RADIUS: f32 = 3.0;
pub const ADVANCED_DRONE_LUNGE: f32 = 0.5;
/// Weight of the sideways weave mixed into the chase direction.
pub const ADVANCED_DRONE_EVASION: f32 = 0.15;
pub const ADVANCED_DRONE_FLANK_CHANCE_PER_SEC: f32 = 0.3;

/// Lateral distance of a flank point from the player.
pub const FLANK_OFFSET: f32 = 3.0;

/// Distance at which a flank point counts as reached.
pub const FLANK_TOLERANCE: f32 = 0.5;

/// Seconds an enemy glows after being shot.
pub const ENEMY_HIT_FLASH_SECS: f32 = 0.1;

// --- Waves ---

pub const WAVE_BASE_ENEMIES: u32 = 4;
pub const WAVE_ENEMIES_PER_WAVE: u32 = 2;
pub const WAVE_MAX_ENEMIES: u32 = 24;
pub const WAVE_DIFFICULTY_STEP: f32 = 0.25;
pub const WAVE_MAX_DIFFICULTY: f32 = 3.0;
/// Per-wave increase in the chance a spawn is an advanced drone.
pub const WAVE_ADVANCED_CHANCE_STEP: f32 = 0.2;
pub const WAVE_ADVANCED_CHANCE_MAX: f32 = 0.8;
/// A power-up spawns on every Nth wave.
pub const WAVE_POWER_UP_EVERY: u32 = 2;

// --- Power-ups ---

pub const POWER_UP_PICKUP_RADIUS: f32 = 1.5;
pub const POWER_UP_HOVER_HEIGHT: f32 = 0.5;
pub const POWER_UP_HEALTH_AMOUNT: f32 = 25.0;
pub const POWER_UP_SHIELD_AMOUNT: f32 = 25.0;
pub const DAMAGE_BOOST_MULTIPLIER: f32 = 2.0;
pub const SPEED_BOOST_MULTIPLIER: f32 = 1.5;
pub const BOOST_DURATION_SECS: f32 = 10.0;

// --- Effects ---

pub const BLOOD_HIT_PARTICLES: u32 = 12;
pub const BLOOD_DEATH_PARTICLES: u32 = 20;
/// Initial velocity spread of gore particles (m/s).
pub const BLOOD_SPREAD: f32 = 2.0;
/// Particle life is min + rand * range seconds.
pub const BLOOD_LIFE_MIN_SECS: f32 = 1.0;
pub const BLOOD_LIFE_RANGE_SECS: f32 = 2.0;
pub const BLOOD_SIZE_MIN: f32 = 0.05;
pub const BLOOD_SIZE_RANGE: f32 = 0.1;
pub const GRAVITY: f32 = 9.8;
/// Velocity retained per 1/60 s.
pub const PARTICLE_DRAG: f32 = 0.98;

// --- Scoring ---

pub const KILL_SCORE: u32 = 100;

// --- Audio volumes ---

pub const GUNSHOT_VOLUME: f32 = 0.3;
pub const ENEMY_DEATH_VOLUME: f32 = 0.2;
pub const PLAYER_HIT_VOLUME: f32 = 0.25;
pub const POWER_UP_VOLUME: f32 = 0.3;
pub const RELOAD_VOLUME: f32 = 0.2;
