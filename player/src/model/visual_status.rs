/// Tri-state used purely for presentation bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualStatus {
    Playing,
    Paused,
    Loading,
}

impl VisualStatus {
    /// Loading wins over everything, then the store's paused flag decides
    pub fn derive(paused: bool, loading: bool) -> Self {
        if loading {
            VisualStatus::Loading
        } else if !paused {
            VisualStatus::Playing
        } else {
            VisualStatus::Paused
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VisualStatus::Playing => "playing",
            VisualStatus::Paused => "paused",
            VisualStatus::Loading => "loading",
        }
    }
}

impl std::fmt::Display for VisualStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
