use crate::model::{MediaState, VisualStatus};

/// Presentation-facing view, recomputed from a store snapshot and the
/// controller's transient flag on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackView {
    pub paused: bool,
    pub loading: bool,
    pub transitioning: bool,
    pub visual_status: VisualStatus,
}

impl PlaybackView {
    pub fn derive(state: &MediaState, transitioning: bool) -> Self {
        let loading = state.loading || transitioning;
        Self {
            paused: state.paused,
            loading,
            transitioning,
            visual_status: VisualStatus::derive(state.paused, loading),
        }
    }

    pub fn is_playing(&self) -> bool {
        !self.paused
    }
}
