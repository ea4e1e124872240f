use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;

use super::builder::{ControllerConfig, IntentPolicy, TransitionControllerBuilder};
use crate::model::{MediaIntent, PlaybackView, VisualStatus};
use crate::store::MediaStore;

/// Counters for toggle requests seen by a controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleStats {
    pub accepted: u64,
    pub ignored: u64,
    pub dispatched: u64,
}

#[derive(Debug, Default)]
struct Counters {
    accepted: AtomicU64,
    ignored: AtomicU64,
    dispatched: AtomicU64,
}

/// Serializes user play/pause toggles through a fixed delay window before
/// forwarding them to a media store
///
/// The controller is either idle or transitioning. An accepted
/// [`request_toggle`](Self::request_toggle) opens the window, and the window
/// closes once the delay has elapsed and exactly one intent has been
/// dispatched. Toggles arriving while the window is open are dropped.
///
/// `request_toggle` is the only path through which presentation code should
/// start or stop playback; dispatching play/pause intents to the store
/// directly bypasses the single in-flight guarantee.
pub struct TransitionController {
    store: Arc<dyn MediaStore>,
    config: ControllerConfig,
    runtime: Handle,
    transitioning: Arc<watch::Sender<bool>>,
    counters: Arc<Counters>,
}

impl std::fmt::Debug for TransitionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionController")
            .field("config", &self.config)
            .field("transitioning", &*self.transitioning.borrow())
            .field("stats", &self.stats())
            .finish()
    }
}

impl TransitionController {
    pub fn builder() -> TransitionControllerBuilder {
        TransitionControllerBuilder::new()
    }

    pub(super) fn new(store: Arc<dyn MediaStore>, config: ControllerConfig, runtime: Handle) -> Self {
        let (transitioning, _) = watch::channel(false);
        Self {
            store,
            config,
            runtime,
            transitioning: Arc::new(transitioning),
            counters: Arc::new(Counters::default()),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Requests a play/pause toggle
    ///
    /// A no-op while a transition is in flight. Otherwise the transitioning
    /// flag is raised before this returns, and after the configured delay a
    /// single `PlayRequest` (store was paused) or `PauseRequest` (store was
    /// playing) is dispatched and the flag is cleared.
    pub fn request_toggle(&self) {
        let accepted = self.transitioning.send_if_modified(|transitioning| {
            if *transitioning {
                false
            } else {
                *transitioning = true;
                true
            }
        });

        if !accepted {
            self.counters.ignored.fetch_add(1, Ordering::Relaxed);
            log::debug!("Toggle ignored: a transition is already in flight");
            return;
        }

        self.counters.accepted.fetch_add(1, Ordering::Relaxed);
        let captured_paused = self.store.state().paused;
        log::info!(
            "Transition started from {} state",
            if captured_paused { "paused" } else { "playing" }
        );

        let store = Arc::clone(&self.store);
        let transitioning = Arc::clone(&self.transitioning);
        let counters = Arc::clone(&self.counters);
        let delay = self.config.transition_delay;
        let policy = self.config.intent_policy;
        // The window is measured from acceptance, not from when the task is first polled.
        let deadline = tokio::time::Instant::now() + delay;

        self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;

            let paused = match policy {
                IntentPolicy::CapturedAtRequest => captured_paused,
                IntentPolicy::ResolvedAtDispatch => store.state().paused,
            };
            let intent = MediaIntent::toggle_from(paused);

            log::debug!("Dispatching {} after {:?}", intent.name(), delay);
            store.dispatch(intent);
            counters.dispatched.fetch_add(1, Ordering::Relaxed);

            transitioning.send_replace(false);
        });
    }

    pub fn is_transitioning(&self) -> bool {
        *self.transitioning.borrow()
    }

    /// Current view, derived from a fresh store snapshot
    pub fn view(&self) -> PlaybackView {
        PlaybackView::derive(&self.store.state(), self.is_transitioning())
    }

    pub fn visual_status(&self) -> VisualStatus {
        self.view().visual_status
    }

    /// Receiver notified every time the transitioning flag flips
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.transitioning.subscribe()
    }

    /// Resolves once no transition is in flight
    pub async fn wait_idle(&self) {
        let mut receiver = self.transitioning.subscribe();
        // The sender lives as long as `self`, so this cannot observe a closed channel.
        let _ = receiver.wait_for(|transitioning| !*transitioning).await;
    }

    pub fn stats(&self) -> ToggleStats {
        ToggleStats {
            accepted: self.counters.accepted.load(Ordering::Relaxed),
            ignored: self.counters.ignored.load(Ordering::Relaxed),
            dispatched: self.counters.dispatched.load(Ordering::Relaxed),
        }
    }
}
