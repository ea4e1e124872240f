use std::time::Duration;

/// Ground-truth playback state as reported by a media store
#[derive(Debug, Clone, PartialEq)]
pub struct MediaState {
    pub paused: bool,
    pub loading: bool,
    pub current_time: Duration,
    pub duration: Duration,
    pub volume: f32,
    pub muted: bool,
}

impl MediaState {
    /// A paused, fully loaded element positioned at the start of a track
    pub fn new(duration: Duration) -> Self {
        Self {
            paused: true,
            loading: false,
            current_time: Duration::ZERO,
            duration,
            volume: 1.0,
            muted: false,
        }
    }

    pub fn ended(&self) -> bool {
        !self.duration.is_zero() && self.current_time >= self.duration
    }

    /// Fraction of the track already played, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.current_time.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

impl Default for MediaState {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}
