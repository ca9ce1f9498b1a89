//! Frame loop: drives the engine once per frame and feeds its output to the
//! audio and HUD collaborators.
//!
//! Headless mode steps with the fixed `DT` as fast as possible. Realtime mode
//! measures the real frame delta and sleeps to hold 60 Hz.

use std::time::{Duration, Instant};

use log::info;

use singularity_core::constants::{DT, TICK_RATE};
use singularity_core::enums::GamePhase;
use singularity_core::state::GameStateSnapshot;
use singularity_sim::GameEngine;

use crate::audio::{self, AudioSink};
use crate::autopilot::InputDriver;
use crate::hud::format_hud;

/// Nominal duration of one frame.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Frames between HUD log lines.
const HUD_LOG_INTERVAL: u64 = TICK_RATE as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Headless,
    Realtime,
}

/// Real elapsed time between consecutive frames.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or since creation).
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a finished run.
#[derive(Debug)]
pub struct RunSummary {
    pub frames: u64,
    pub last_snapshot: GameStateSnapshot,
}

/// Run until `seconds` have passed (simulated in headless mode, wall clock in
/// realtime mode) or the game is over.
pub fn run(
    engine: &mut GameEngine,
    driver: &mut dyn InputDriver,
    mut audio_sink: Option<&mut dyn AudioSink>,
    mode: LoopMode,
    seconds: f32,
) -> RunSummary {
    let mut clock = FrameClock::new();
    let started = Instant::now();
    let mut next_tick_time = started;
    let frame_budget = (seconds * TICK_RATE as f32).ceil() as u64;

    let mut frames = 0;
    let mut snapshot = engine.tick(0.0);
    loop {
        // 1. Input for this frame, decided from the last one
        engine.queue_commands(driver.commands(&snapshot));

        // 2. Advance one frame
        let delta = match mode {
            LoopMode::Headless => DT,
            LoopMode::Realtime => clock.delta(),
        };
        snapshot = engine.tick(delta);
        frames += 1;

        // 3. Collaborators
        audio::dispatch(audio_sink.as_deref_mut(), &snapshot.audio_events);
        if frames % HUD_LOG_INTERVAL == 0 {
            info!("{}", format_hud(&snapshot.hud));
        }

        if snapshot.phase == GamePhase::GameOver {
            break;
        }
        let done = match mode {
            LoopMode::Headless => frames >= frame_budget,
            LoopMode::Realtime => started.elapsed().as_secs_f32() >= seconds,
        };
        if done {
            break;
        }

        // 4. Sleep until the next frame
        if mode == LoopMode::Realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind: reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }

    RunSummary {
        frames,
        last_snapshot: snapshot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use singularity_core::commands::PlayerCommand;
    use singularity_core::config::GameConfig;
    use singularity_core::events::AudioEvent;

    use crate::autopilot::Autopilot;

    /// Driver that only starts the game.
    struct StartOnly;

    impl InputDriver for StartOnly {
        fn commands(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
            if snapshot.phase == GamePhase::Ready {
                vec![PlayerCommand::StartGame]
            } else {
                Vec::new()
            }
        }
    }

    #[derive(Default)]
    struct Counter(usize);

    impl AudioSink for Counter {
        fn play(&mut self, _event: &AudioEvent) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_headless_run_honors_frame_budget() {
        let mut engine = GameEngine::new(GameConfig::default());
        let summary = run(&mut engine, &mut StartOnly, None, LoopMode::Headless, 1.0);
        assert_eq!(summary.frames, 60);
        assert_eq!(summary.last_snapshot.phase, GamePhase::Active);
        // StartGame is drained at the top of the first frame, which then runs.
        assert_eq!(engine.time().frame, 60);
    }

    #[test]
    fn test_autopilot_run_scores_and_plays_audio() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut pilot = Autopilot::new();
        let mut sink = Counter::default();
        let summary = run(
            &mut engine,
            &mut pilot,
            Some(&mut sink),
            LoopMode::Headless,
            10.0,
        );
        assert!(summary.last_snapshot.score.shots_fired > 0);
        assert!(summary.last_snapshot.score.kills > 0);
        assert!(sink.0 > 0);
    }

    #[test]
    fn test_frame_clock_is_non_negative() {
        let mut clock = FrameClock::new();
        assert!(clock.delta() >= 0.0);
        assert!(clock.delta() >= 0.0);
    }
}
