mod builder;
mod transition;

pub use builder::{ControllerConfig, IntentPolicy, TransitionControllerBuilder};
pub use transition::{ToggleStats, TransitionController};

use std::time::Duration;

/// Artificial latency added in front of every play/pause dispatch
pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(500);
