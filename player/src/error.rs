/// Errors raised while configuring the player or building intents
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Invalid volume {0}: expected a value between 0.0 and 1.0")]
    InvalidVolume(f32),

    /// Host setup failures: terminal, log file or runtime creation. The
    /// controller and stores never produce this variant.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlayerError>;
