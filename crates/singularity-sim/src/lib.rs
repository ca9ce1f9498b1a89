//! Simulation engine for Operation Singularity.
//!
//! Owns the hecs ECS world, runs systems once per rendered frame,
//! and produces GameStateSnapshots for the host.

pub mod engine;
pub mod input;
pub mod player;
pub mod raycast;
pub mod systems;
pub mod weapon;
pub mod world_setup;

pub use engine::GameEngine;
pub use singularity_core as core;
