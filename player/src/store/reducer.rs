use std::time::Duration;

use crate::model::{MediaIntent, MediaState};

/// Simulated media element: the visible state plus the load still pending
/// before playback actually starts
#[derive(Debug, Clone, PartialEq)]
pub struct MediaElement {
    pub state: MediaState,
    pub pending_load: Option<Duration>,
}

impl MediaElement {
    pub fn new(duration: Duration) -> Self {
        Self {
            state: MediaState::new(duration),
            pending_load: None,
        }
    }

    /// Moves the element's clock forward. A pending load consumes elapsed
    /// time before the playhead does.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.state.paused {
            return;
        }

        let mut remaining = elapsed;
        if let Some(pending) = self.pending_load {
            if remaining < pending {
                self.pending_load = Some(pending - remaining);
                return;
            }
            remaining -= pending;
            self.pending_load = None;
            self.state.loading = false;
            log::debug!("Media element finished loading");
        }

        self.state.current_time = self.state.current_time.saturating_add(remaining);
        if self.state.current_time >= self.state.duration {
            self.state.current_time = self.state.duration;
            self.state.paused = true;
            log::debug!("Media element reached the end of the track");
        }
    }
}

pub fn media_reducer(element: &mut MediaElement, intent: MediaIntent, load_latency: Duration) {
    let state = &mut element.state;
    match intent {
        MediaIntent::PlayRequest => {
            if !state.paused {
                return;
            }
            if state.ended() {
                state.current_time = Duration::ZERO;
            }
            state.paused = false;
            if load_latency.is_zero() {
                state.loading = false;
                element.pending_load = None;
            } else {
                state.loading = true;
                element.pending_load = Some(load_latency);
            }
        }
        MediaIntent::PauseRequest => {
            state.paused = true;
            state.loading = false;
            element.pending_load = None;
        }
        MediaIntent::SeekRequest(position) => {
            state.current_time = position.min(state.duration);
        }
        MediaIntent::VolumeRequest(volume) => {
            state.volume = volume.clamp(0.0, 1.0);
            if state.volume > 0.0 {
                state.muted = false;
            }
        }
        MediaIntent::MuteRequest => {
            state.muted = true;
        }
        MediaIntent::UnmuteRequest => {
            state.muted = false;
        }
    }
}
