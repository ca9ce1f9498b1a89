//! singularity: run an Operation Singularity session without a browser.
//!
//! Usage:
//!   singularity --seconds 30
//!   RUST_LOG=debug singularity --config game.json --seed 7 --realtime

use std::process;

use log::info;

use singularity_app::args::{parse_args, print_usage, RunOptions};
use singularity_app::audio::LogAudioSink;
use singularity_app::autopilot::Autopilot;
use singularity_app::game_loop::{self, LoopMode};
use singularity_core::config::GameConfig;
use singularity_core::error::ConfigError;
use singularity_sim::GameEngine;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            process::exit(1);
        }
    };
    if options.help {
        print_usage();
        return;
    }

    let config = match load_config(&options) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mode = if options.realtime {
        LoopMode::Realtime
    } else {
        LoopMode::Headless
    };
    info!("running {:.1}s {mode:?} session, seed {}", options.seconds, config.seed);

    let mut engine = GameEngine::new(config);
    let mut pilot = Autopilot::new();
    let mut audio = LogAudioSink::default();
    let summary = game_loop::run(&mut engine, &mut pilot, Some(&mut audio), mode, options.seconds);

    info!("{} frames, {} sounds", summary.frames, audio.played);
    match serde_json::to_string_pretty(&summary.last_snapshot.score) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: failed to serialize score: {e}");
            process::exit(1);
        }
    }
}

fn load_config(options: &RunOptions) -> Result<GameConfig, ConfigError> {
    let mut config = match &options.config_path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = options.seed {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}
