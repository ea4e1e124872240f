use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use super::transition::TransitionController;
use super::DEFAULT_TRANSITION_DELAY;
use crate::error::PlayerError;
use crate::store::MediaStore;

/// Decides which `paused` value picks the intent dispatched at the end of a
/// transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntentPolicy {
    /// Use the value read when the toggle was accepted, even if the store
    /// changed during the delay window
    #[default]
    CapturedAtRequest,
    /// Re-read the store when the delay expires
    ResolvedAtDispatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    pub transition_delay: Duration,
    pub intent_policy: IntentPolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            transition_delay: DEFAULT_TRANSITION_DELAY,
            intent_policy: IntentPolicy::default(),
        }
    }
}

/// Builder for [`TransitionController`]
///
/// # Example
///
/// ```rust,no_run
/// use player::{SimulatedMediaStore, TransitionController};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # async fn run() -> player::Result<()> {
/// let store = Arc::new(SimulatedMediaStore::default());
/// let controller = TransitionController::builder()
///     .with_transition_delay(Duration::from_millis(500))
///     .build(store)?;
///
/// controller.request_toggle();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct TransitionControllerBuilder {
    config: ControllerConfig,
}

impl TransitionControllerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transition_delay(mut self, delay: Duration) -> Self {
        self.config.transition_delay = delay;
        self
    }

    pub fn with_intent_policy(mut self, policy: IntentPolicy) -> Self {
        self.config.intent_policy = policy;
        self
    }

    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the controller on top of `store`
    ///
    /// Must be called from inside a Tokio runtime: the handle captured here
    /// runs every deferred dispatch, which keeps `request_toggle` infallible.
    pub fn build(self, store: Arc<dyn MediaStore>) -> Result<TransitionController, PlayerError> {
        if self.config.transition_delay.is_zero() {
            return Err(PlayerError::ConfigurationError(
                "transition delay must be greater than zero".to_string(),
            ));
        }

        let runtime = Handle::try_current().map_err(|e| {
            PlayerError::ConfigurationError(format!(
                "transition controller must be built inside a Tokio runtime: {}",
                e
            ))
        })?;

        log::debug!(
            "Building transition controller: delay {:?}, policy {:?}",
            self.config.transition_delay,
            self.config.intent_policy
        );

        Ok(TransitionController::new(store, self.config, runtime))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SimulatedMediaStore;

    #[test]
    fn test_default_config() {
        let config = ControllerConfig::default();
        assert_eq!(config.transition_delay, Duration::from_millis(500));
        assert_eq!(config.intent_policy, IntentPolicy::CapturedAtRequest);
    }

    #[tokio::test]
    async fn test_zero_delay_is_rejected() {
        let result = TransitionController::builder()
            .with_transition_delay(Duration::ZERO)
            .build(Arc::new(SimulatedMediaStore::default()));

        match result {
            Err(PlayerError::ConfigurationError(msg)) => {
                assert!(msg.contains("greater than zero"));
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[test]
    fn test_build_outside_runtime_fails() {
        let result = TransitionController::builder().build(Arc::new(SimulatedMediaStore::default()));

        match result {
            Err(PlayerError::ConfigurationError(msg)) => {
                assert!(msg.contains("Tokio runtime"));
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[tokio::test]
    async fn test_builder_applies_settings() {
        let controller = TransitionController::builder()
            .with_transition_delay(Duration::from_millis(250))
            .with_intent_policy(IntentPolicy::ResolvedAtDispatch)
            .build(Arc::new(SimulatedMediaStore::default()))
            .unwrap();

        assert_eq!(controller.config().transition_delay, Duration::from_millis(250));
        assert_eq!(controller.config().intent_policy, IntentPolicy::ResolvedAtDispatch);
    }
}
