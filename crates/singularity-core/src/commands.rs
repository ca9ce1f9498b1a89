//! Player commands fed into the simulation by the host.
//!
//! Commands are queued as they arrive and drained at the start of the next frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player inputs and session controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Pointer locked: begin playing.
    StartGame,
    /// Pointer released.
    Pause,
    Resume,
    /// Throw away the session and return to `Ready`.
    Restart,

    // --- Input ---
    KeyDown { key: KeyCode },
    KeyUp { key: KeyCode },
    /// Left button fires along the camera forward.
    MouseDown { button: MouseButton },
    /// Relative mouse movement in pixels.
    Look { dx: f32, dy: f32 },
    /// Fire along an explicit world-space direction.
    Fire { direction: Vec3 },
}
