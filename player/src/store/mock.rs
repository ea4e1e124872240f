use mockall::mock;
use std::time::Duration;

use crate::model::{MediaIntent, MediaState};
use crate::store::MediaStore;

mock! {
    pub MediaStore {}

    impl MediaStore for MediaStore {
        fn state(&self) -> MediaState;
        fn dispatch(&self, intent: MediaIntent);
    }
}

pub struct MockMediaStoreBuilder {
    paused: bool,
    loading: bool,
}

impl MockMediaStoreBuilder {
    pub fn new() -> Self {
        Self {
            paused: true,
            loading: false,
        }
    }

    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Builds a mock whose `state()` always reports the configured flags.
    /// No `dispatch` expectation is set; callers add their own.
    pub fn build(self) -> MockMediaStore {
        let mut state = MediaState::new(Duration::from_secs(213));
        state.paused = self.paused;
        state.loading = self.loading;

        let mut store = MockMediaStore::new();
        store.expect_state().return_const(state);
        store
    }
}

impl Default for MockMediaStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
