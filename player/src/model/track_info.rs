#[derive(Debug, Clone, PartialEq)]
pub struct TrackInfo {
    pub title: String,
    pub artist: String,
}

impl Default for TrackInfo {
    fn default() -> Self {
        Self {
            title: "Awesome Song Title".to_string(),
            artist: "Amazing Artist".to_string(),
        }
    }
}
