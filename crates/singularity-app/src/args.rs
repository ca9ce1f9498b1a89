//! Command-line options.

use std::path::PathBuf;

use singularity_core::error::ConfigError;

/// Default length of a run in simulated (or wall-clock) seconds.
pub const DEFAULT_SECONDS: f32 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    /// Overrides the config file's seed.
    pub seed: Option<u64>,
    pub seconds: f32,
    /// Pace frames against the wall clock instead of stepping as fast as possible.
    pub realtime: bool,
    pub help: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            seed: None,
            seconds: DEFAULT_SECONDS,
            realtime: false,
            help: false,
        }
    }
}

pub fn print_usage() {
    eprintln!(
        "singularity: headless Operation Singularity session\n\
         \n\
         Options:\n\
         \n\
           --config <path>   JSON game config (missing fields use defaults)\n\
           --seed <n>        RNG seed, overrides the config\n\
           --seconds <n>     Length of the run (default: 60)\n\
           --realtime        Pace frames at 60 Hz against the wall clock\n\
           --help            Show this message\n\
         \n\
         Logging is controlled by RUST_LOG, e.g. RUST_LOG=debug singularity --seconds 30\n"
    );
}

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<RunOptions, ConfigError> {
    let mut options = RunOptions::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                options.config_path = Some(PathBuf::from(value(args, i, "--config")?));
                i += 1;
            }
            "--seed" => {
                let raw = value(args, i, "--seed")?;
                options.seed = Some(raw.parse().map_err(|_| ConfigError::Invalid {
                    field: "--seed",
                    reason: format!("`{raw}` is not an unsigned integer"),
                })?);
                i += 1;
            }
            "--seconds" => {
                let raw = value(args, i, "--seconds")?;
                let seconds: f32 = raw.parse().map_err(|_| ConfigError::Invalid {
                    field: "--seconds",
                    reason: format!("`{raw}` is not a number"),
                })?;
                if !(seconds.is_finite() && seconds > 0.0) {
                    return Err(ConfigError::Invalid {
                        field: "--seconds",
                        reason: "must be a positive number".to_string(),
                    });
                }
                options.seconds = seconds;
                i += 1;
            }
            "--realtime" => options.realtime = true,
            "help" | "--help" | "-h" => options.help = true,
            other => {
                return Err(ConfigError::Invalid {
                    field: "arguments",
                    reason: format!("unknown option `{other}`"),
                });
            }
        }
        i += 1;
    }
    Ok(options)
}

fn value<'a>(args: &'a [String], i: usize, flag: &'static str) -> Result<&'a str, ConfigError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| ConfigError::Invalid {
            field: flag,
            reason: "missing value".to_string(),
        })
}
