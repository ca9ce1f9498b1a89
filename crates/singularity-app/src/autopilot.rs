//! Scripted input for unattended runs.
//!
//! Stands in for the keyboard and mouse: starts the game, strafes back and
//! forth and shoots at the nearest live drone.

use singularity_core::commands::PlayerCommand;
use singularity_core::enums::{EnemyState, GamePhase, KeyCode};
use singularity_core::state::GameStateSnapshot;

/// Produces the commands for the next frame from the last snapshot.
pub trait InputDriver {
    fn commands(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand>;
}

/// Frames spent strafing in one direction before switching.
const STRAFE_PERIOD_FRAMES: u64 = 90;

#[derive(Debug, Default)]
pub struct Autopilot {
    frame: u64,
    strafe: Option<KeyCode>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    fn strafe_commands(&mut self, commands: &mut Vec<PlayerCommand>) {
        if self.frame % STRAFE_PERIOD_FRAMES != 0 {
            return;
        }
        let next = match self.strafe {
            Some(KeyCode::KeyD) => KeyCode::KeyA,
            _ => KeyCode::KeyD,
        };
        if let Some(previous) = self.strafe.replace(next) {
            commands.push(PlayerCommand::KeyUp { key: previous });
        }
        commands.push(PlayerCommand::KeyDown { key: next });
    }
}

impl InputDriver for Autopilot {
    fn commands(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        match snapshot.phase {
            GamePhase::Ready => return vec![PlayerCommand::StartGame],
            GamePhase::Paused => return vec![PlayerCommand::Resume],
            GamePhase::GameOver => return Vec::new(),
            GamePhase::Active => {}
        }

        let mut commands = Vec::new();
        self.strafe_commands(&mut commands);
        self.frame += 1;

        let eye = snapshot.camera.position;
        let target = snapshot
            .enemies
            .iter()
            .filter(|e| e.state != EnemyState::Dead)
            .min_by(|a, b| {
                a.position
                    .distance_squared(eye)
                    .total_cmp(&b.position.distance_squared(eye))
            });
        if let Some(enemy) = target {
            commands.push(PlayerCommand::Fire {
                direction: enemy.position - eye,
            });
        }
        commands
    }
}
