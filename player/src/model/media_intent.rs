use std::time::Duration;

use crate::error::PlayerError;

/// Requests to change playback state, resolved asynchronously by a media store
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaIntent {
    PlayRequest,
    PauseRequest,
    SeekRequest(Duration),
    VolumeRequest(f32),
    MuteRequest,
    UnmuteRequest,
}

impl MediaIntent {
    /// Intent that flips the given paused flag
    pub fn toggle_from(paused: bool) -> Self {
        if paused {
            MediaIntent::PlayRequest
        } else {
            MediaIntent::PauseRequest
        }
    }

    pub fn volume(volume: f32) -> Result<Self, PlayerError> {
        if !(0.0..=1.0).contains(&volume) {
            return Err(PlayerError::InvalidVolume(volume));
        }
        Ok(MediaIntent::VolumeRequest(volume))
    }

    pub fn name(&self) -> &'static str {
        match self {
            MediaIntent::PlayRequest => "MEDIA_PLAY_REQUEST",
            MediaIntent::PauseRequest => "MEDIA_PAUSE_REQUEST",
            MediaIntent::SeekRequest(_) => "MEDIA_SEEK_REQUEST",
            MediaIntent::VolumeRequest(_) => "MEDIA_VOLUME_REQUEST",
            MediaIntent::MuteRequest => "MEDIA_MUTE_REQUEST",
            MediaIntent::UnmuteRequest => "MEDIA_UNMUTE_REQUEST",
        }
    }
}
