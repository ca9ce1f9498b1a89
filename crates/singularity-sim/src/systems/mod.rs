//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! Entity state lives in components; player state is passed in explicitly.

pub mod cleanup;
pub mod effects;
pub mod enemy_ai;
pub mod firing;
pub mod player_control;
pub mod power_ups;
pub mod snapshot;
pub mod wave_spawner;
