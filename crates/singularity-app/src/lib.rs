//! Headless runner for Operation Singularity.
//!
//! Wires the simulation engine to a frame clock, a scripted input driver and
//! logging stand-ins for the audio and HUD collaborators.

pub mod args;
pub mod audio;
pub mod autopilot;
pub mod game_loop;
pub mod hud;

pub use singularity_core as core;
