//! Polled input state.
//!
//! Keyboard events flip entries in the key map as commands are drained;
//! systems read the map once per frame. Clicks become discrete shot requests.

use std::collections::HashMap;

use glam::Vec3;

use singularity_core::enums::KeyCode;

#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<KeyCode, bool>,
    /// Queued shots: `None` fires along the camera forward.
    pending_shots: Vec<Option<Vec3>>,
}

impl InputState {
    pub fn set_key(&mut self, key: KeyCode, pressed: bool) {
        self.keys.insert(key, pressed);
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.keys.get(&key).copied().unwrap_or(false)
    }

    /// Movement intent as (forward, right), each -1, 0 or 1.
    pub fn movement_axes(&self) -> (f32, f32) {
        let axis = |pos: KeyCode, neg: KeyCode| {
            f32::from(u8::from(self.is_pressed(pos))) - f32::from(u8::from(self.is_pressed(neg)))
        };
        (
            axis(KeyCode::KeyW, KeyCode::KeyS),
            axis(KeyCode::KeyD, KeyCode::KeyA),
        )
    }

    pub fn queue_shot(&mut self, direction: Option<Vec3>) {
        self.pending_shots.push(direction);
    }

    pub fn take_shots(&mut self) -> Vec<Option<Vec3>> {
        std::mem::take(&mut self.pending_shots)
    }

    pub fn has_pending_shots(&self) -> bool {
        !self.pending_shots.is_empty()
    }

    /// Release every key and drop queued shots (pointer unlocked).
    pub fn clear(&mut self) {
        self.keys.clear();
        self.pending_shots.clear();
    }
}
