use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::model::{MediaIntent, MediaState};
use crate::store::reducer::{media_reducer, MediaElement};
use crate::store::MediaStore;

/// Tunables for the simulated media element
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Length of the loaded track
    pub duration: Duration,
    /// Clock time a play request spends loading before the playhead moves
    pub load_latency: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(213),
            load_latency: Duration::from_millis(150),
        }
    }
}

/// In-process media store that models a media element without decoding audio
///
/// Clones share the same element. Nothing moves on its own: the host drives
/// the element's clock through [`SimulatedMediaStore::advance`].
#[derive(Debug, Clone)]
pub struct SimulatedMediaStore {
    element: Arc<Mutex<MediaElement>>,
    config: SimulationConfig,
}

impl SimulatedMediaStore {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            element: Arc::new(Mutex::new(MediaElement::new(config.duration))),
            config,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn advance(&self, elapsed: Duration) {
        self.lock().advance(elapsed);
    }

    pub fn with_state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&MediaState) -> T,
    {
        let element = self.lock();
        f(&element.state)
    }

    fn lock(&self) -> MutexGuard<'_, MediaElement> {
        self.element.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SimulatedMediaStore {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl MediaStore for SimulatedMediaStore {
    fn state(&self) -> MediaState {
        self.lock().state.clone()
    }

    fn dispatch(&self, intent: MediaIntent) {
        log::debug!("{} received by simulated store", intent.name());
        let mut element = self.lock();
        media_reducer(&mut element, intent, self.config.load_latency);
    }
}
