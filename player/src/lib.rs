pub mod controller;
pub mod error;
pub mod model;
pub mod store;

// Re-export key types for easier access
pub use controller::{ControllerConfig, IntentPolicy, ToggleStats, TransitionController, TransitionControllerBuilder};
pub use error::{PlayerError, Result};
pub use model::{MediaIntent, MediaState, PlaybackView, TrackInfo, VisualStatus};
pub use store::{media_reducer, MediaElement, MediaStore, SimulatedMediaStore, SimulationConfig};

#[cfg(any(test, feature = "mock"))]
pub use store::{MockMediaStore, MockMediaStoreBuilder};
