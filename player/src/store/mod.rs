mod reducer;
mod simulated;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use reducer::{media_reducer, MediaElement};
pub use simulated::{SimulatedMediaStore, SimulationConfig};

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockMediaStore, MockMediaStoreBuilder};

use crate::model::{MediaIntent, MediaState};

/// Capability the transition controller needs from a media store
///
/// Implementations hold the ground-truth playback state of a media element
/// and resolve intents on their own schedule. Dispatch is fire-and-forget:
/// failures to actually start or stop playback stay inside the store.
pub trait MediaStore: Send + Sync {
    /// Returns a snapshot of the current media state
    fn state(&self) -> MediaState;

    /// Hands an intent to the store for asynchronous resolution
    fn dispatch(&self, intent: MediaIntent);
}
