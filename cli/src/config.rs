use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use player::{ControllerConfig, IntentPolicy, SimulationConfig, TrackInfo};
use rand::Rng;

/// Command-line arguments for the terminal player
#[derive(Parser, Debug)]
#[command(name = "music-player")]
#[command(about = "Terminal music player widget with delayed play/pause transitions")]
#[command(version)]
pub struct Args {
    /// Artificial delay between a toggle and its play/pause dispatch
    #[arg(long, default_value_t = 500, env = "PLAYER_TRANSITION_DELAY_MS")]
    pub transition_delay_ms: u64,

    /// Which paused value decides the dispatched intent
    #[arg(long, value_enum, default_value_t = PolicyArg::Captured)]
    pub intent_policy: PolicyArg,

    /// Simulated load time after a play request (random 50-400ms if omitted)
    #[arg(long)]
    pub load_latency_ms: Option<u64>,

    /// Length of the simulated track in seconds
    #[arg(long, default_value_t = 213)]
    pub track_secs: u64,

    #[arg(long, default_value = "Awesome Song Title")]
    pub title: String,

    #[arg(long, default_value = "Amazing Artist")]
    pub artist: String,

    /// The terminal owns stdout, so logs go to this file
    #[arg(long, default_value = "player.log", env = "PLAYER_LOG_FILE")]
    pub log_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    Captured,
    AtDispatch,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Args {
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            transition_delay: Duration::from_millis(self.transition_delay_ms),
            intent_policy: match self.intent_policy {
                PolicyArg::Captured => IntentPolicy::CapturedAtRequest,
                PolicyArg::AtDispatch => IntentPolicy::ResolvedAtDispatch,
            },
        }
    }

    pub fn simulation_config(&self) -> SimulationConfig {
        let load_latency_ms = self
            .load_latency_ms
            .unwrap_or_else(|| rand::thread_rng().gen_range(50..=400));

        SimulationConfig {
            duration: Duration::from_secs(self.track_secs),
            load_latency: Duration::from_millis(load_latency_ms),
        }
    }

    pub fn track_info(&self) -> TrackInfo {
        TrackInfo {
            title: self.title.clone(),
            artist: self.artist.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["player"]).unwrap();

        assert_eq!(args.intent_policy, PolicyArg::Captured);
        assert_eq!(args.log_level, LogLevel::Info);
        assert_eq!(args.track_info(), TrackInfo::default());
        assert_eq!(args.controller_config().intent_policy, IntentPolicy::CapturedAtRequest);
    }

    #[test]
    fn test_policy_and_latency_flags() {
        let args = Args::try_parse_from([
            "player",
            "--intent-policy",
            "at-dispatch",
            "--load-latency-ms",
            "75",
            "--track-secs",
            "30",
        ])
        .unwrap();

        assert_eq!(args.controller_config().intent_policy, IntentPolicy::ResolvedAtDispatch);
        let simulation = args.simulation_config();
        assert_eq!(simulation.load_latency, Duration::from_millis(75));
        assert_eq!(simulation.duration, Duration::from_secs(30));
    }

    #[test]
    fn test_random_latency_stays_in_range() {
        let args = Args::try_parse_from(["player"]).unwrap();
        for _ in 0..20 {
            let latency = args.simulation_config().load_latency;
            assert!(latency >= Duration::from_millis(50));
            assert!(latency <= Duration::from_millis(400));
        }
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        assert!(Args::try_parse_from(["player", "--intent-policy", "latest"]).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::Debug);
        assert_eq!(LevelFilter::from(LogLevel::Off), LevelFilter::Off);
    }
}
