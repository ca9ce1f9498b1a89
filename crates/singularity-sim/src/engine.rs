//! Simulation engine, the core of the game.
//!
//! `GameEngine` owns the hecs ECS world and the player, drains queued
//! commands, runs every system once per rendered frame and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use singularity_core::commands::PlayerCommand;
use singularity_core::config::GameConfig;
use singularity_core::constants::RELOAD_VOLUME;
use singularity_core::enums::{GamePhase, KeyCode, MouseButton};
use singularity_core::events::AudioEvent;
use singularity_core::state::GameStateSnapshot;
use singularity_core::types::SimTime;

use crate::input::InputState;
use crate::player::Player;
use crate::systems;
use crate::systems::wave_spawner::WaveController;

/// The simulation engine. Owns the ECS world and all session state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    config: GameConfig,
    rng: ChaCha8Rng,
    player: Player,
    input: InputState,
    waves: WaveController,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
}

impl GameEngine {
    /// Create a new engine. Same config (and seed) plus same commands gives
    /// the same sequence of snapshots.
    pub fn new(config: GameConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: Player::new(&config),
            input: InputState::default(),
            waves: WaveController::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            config,
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one rendered frame and return the resulting snapshot.
    /// `delta_secs` is clamped to `[0, max_frame_delta]`.
    pub fn tick(&mut self, delta_secs: f32) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let dt = self.clamp_delta(delta_secs);
            self.run_systems(dt);
            self.time.advance(dt);

            if self.player.vitals.is_dead() {
                self.phase = GamePhase::GameOver;
                self.input.clear();
                info!(
                    "game over on wave {} with score {}",
                    self.waves.wave, self.player.score.score
                );
            }
        } else {
            // Shots requested outside active play are discarded.
            self.input.take_shots();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.player,
            &self.waves,
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Number of the wave in play (0 before the first).
    pub fn wave(&self) -> u32 {
        self.waves.wave
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage entities directly.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Spawn a drone outside the wave controller (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        kind: singularity_core::enums::DroneKind,
        position: glam::Vec3,
    ) -> hecs::Entity {
        let id = self.waves.next_enemy_id;
        self.waves.next_enemy_id += 1;
        crate::world_setup::spawn_enemy(&mut self.world, &mut self.rng, id, kind, position, 1.0)
    }

    fn clamp_delta(&self, delta_secs: f32) -> f32 {
        if delta_secs.is_nan() {
            return 0.0;
        }
        delta_secs.clamp(0.0, self.config.max_frame_delta)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Ready {
                    self.phase = GamePhase::Active;
                    info!("game started (seed {})", self.config.seed);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                    self.input.clear();
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Restart => self.reset(),
            PlayerCommand::KeyDown { key } => {
                if self.phase != GamePhase::Active {
                    return;
                }
                self.input.set_key(key, true);
                if key == KeyCode::KeyR
                    && self
                        .player
                        .weapon
                        .start_reload(self.config.weapon.reload_delay_secs)
                {
                    self.audio_events.push(AudioEvent::Reload {
                        volume: RELOAD_VOLUME,
                    });
                }
            }
            PlayerCommand::KeyUp { key } => self.input.set_key(key, false),
            PlayerCommand::MouseDown { button } => {
                if self.phase == GamePhase::Active && button == MouseButton::Left {
                    self.input.queue_shot(None);
                }
            }
            PlayerCommand::Look { dx, dy } => {
                if self.phase == GamePhase::Active {
                    let sensitivity = self.config.player.mouse_sensitivity;
                    self.player.camera.rotate(dx * sensitivity, dy * sensitivity);
                }
            }
            PlayerCommand::Fire { direction } => {
                if self.phase == GamePhase::Active {
                    self.input.queue_shot(Some(direction));
                }
            }
        }
    }

    /// Throw away the session and return to `Ready` with a freshly seeded RNG.
    fn reset(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.phase = GamePhase::Ready;
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.player = Player::new(&self.config);
        self.input.clear();
        self.waves = WaveController::default();
        self.despawn_buffer.clear();
        self.audio_events.clear();
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        let now = self.time.elapsed_secs;

        // 1. Wave spawning (only when the pool is empty)
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.waves,
            &self.config.waves,
            self.player.camera.position,
            &mut self.player.score,
        );
        // 2. Player timers and movement
        systems::player_control::run(
            &mut self.player,
            &self.input,
            &self.config.player,
            now,
            dt,
        );
        // 3. Shots requested since the last frame
        for direction in self.input.take_shots() {
            systems::firing::fire(
                &mut self.world,
                &mut self.rng,
                &mut self.player,
                &self.config,
                direction,
                now,
                &mut self.audio_events,
            );
        }
        // 4. Enemy AI and attacks on the player
        systems::enemy_ai::run(
            &mut self.world,
            &mut self.rng,
            &mut self.player,
            self.config.combat.shield_overflow,
            now,
            dt,
            &mut self.audio_events,
        );
        // 5. Power-up pickup
        systems::power_ups::run(&mut self.world, &mut self.player, now, &mut self.audio_events);
        // 6. Effect lifetimes and particle physics
        systems::effects::run(&mut self.world, dt, &mut self.despawn_buffer);
        // 7. Cleanup (dead drones, collected power-ups)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
