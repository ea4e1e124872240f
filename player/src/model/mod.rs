mod media_intent;
mod media_state;
mod playback_view;
mod track_info;
mod visual_status;

pub use media_intent::MediaIntent;
pub use media_state::MediaState;
pub use playback_view::PlaybackView;
pub use track_info::TrackInfo;
pub use visual_status::VisualStatus;
