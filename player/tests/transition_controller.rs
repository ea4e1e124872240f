use player::{
    IntentPolicy, MediaIntent, MediaState, MediaStore, PlayerError, SimulatedMediaStore,
    SimulationConfig, TransitionController, VisualStatus,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// Store that applies play/pause synchronously and remembers when each
/// intent arrived
struct RecordingStore {
    state: Mutex<MediaState>,
    dispatched: Mutex<Vec<(MediaIntent, Instant)>>,
}

impl RecordingStore {
    fn new(paused: bool) -> Arc<Self> {
        let mut state = MediaState::new(Duration::from_secs(180));
        state.paused = paused;
        Arc::new(Self {
            state: Mutex::new(state),
            dispatched: Mutex::new(Vec::new()),
        })
    }

    fn set_paused(&self, paused: bool) {
        self.state.lock().unwrap().paused = paused;
    }

    fn intents(&self) -> Vec<MediaIntent> {
        self.dispatched.lock().unwrap().iter().map(|(intent, _)| *intent).collect()
    }

    fn dispatch_times(&self) -> Vec<Instant> {
        self.dispatched.lock().unwrap().iter().map(|(_, at)| *at).collect()
    }
}

impl MediaStore for RecordingStore {
    fn state(&self) -> MediaState {
        self.state.lock().unwrap().clone()
    }

    fn dispatch(&self, intent: MediaIntent) {
        self.dispatched.lock().unwrap().push((intent, Instant::now()));
        let mut state = self.state.lock().unwrap();
        match intent {
            MediaIntent::PlayRequest => state.paused = false,
            MediaIntent::PauseRequest => state.paused = true,
            _ => {}
        }
    }
}

async fn advance_ms(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_paused_loading_playing_sequence() {
    let store = RecordingStore::new(true);
    let controller = TransitionController::builder().build(store.clone()).unwrap();

    assert_eq!(controller.visual_status(), VisualStatus::Paused);

    controller.request_toggle();
    assert_eq!(controller.visual_status(), VisualStatus::Loading);

    controller.wait_idle().await;
    assert_eq!(controller.visual_status(), VisualStatus::Playing);
    assert_eq!(store.intents(), vec![MediaIntent::PlayRequest]);
}

#[tokio::test(start_paused = true)]
async fn test_no_dispatch_before_delay_elapses() {
    let store = RecordingStore::new(true);
    let controller = TransitionController::builder().build(store.clone()).unwrap();
    let start = Instant::now();

    controller.request_toggle();
    advance_ms(499).await;

    assert!(store.intents().is_empty());
    assert!(controller.is_transitioning());
    assert_eq!(controller.visual_status(), VisualStatus::Loading);

    controller.wait_idle().await;
    assert_eq!(store.dispatch_times(), vec![start + Duration::from_millis(500)]);
    assert!(!controller.is_transitioning());
}

#[tokio::test(start_paused = true)]
async fn test_burst_produces_single_intent() {
    let store = RecordingStore::new(true);
    let controller = TransitionController::builder().build(store.clone()).unwrap();

    controller.request_toggle();
    for _ in 0..5 {
        advance_ms(90).await;
        controller.request_toggle();
    }
    controller.wait_idle().await;

    assert_eq!(store.intents(), vec![MediaIntent::PlayRequest]);
    let stats = controller.stats();
    assert_eq!(stats.accepted, 1);
    assert_eq!(stats.ignored, 5);
}

#[tokio::test(start_paused = true)]
async fn test_consecutive_bursts_alternate_in_acceptance_order() {
    let store = RecordingStore::new(true);
    let controller = TransitionController::builder().build(store.clone()).unwrap();

    for _ in 0..3 {
        controller.request_toggle();
        controller.request_toggle();
        controller.wait_idle().await;
    }

    assert_eq!(
        store.intents(),
        vec![
            MediaIntent::PlayRequest,
            MediaIntent::PauseRequest,
            MediaIntent::PlayRequest,
        ]
    );
    let times = store.dispatch_times();
    assert!(times.windows(2).all(|pair| pair[1] - pair[0] >= Duration::from_millis(500)));
}

#[tokio::test(start_paused = true)]
async fn test_captured_policy_keeps_value_from_request_time() {
    let store = RecordingStore::new(true);
    let controller = TransitionController::builder().build(store.clone()).unwrap();

    controller.request_toggle();
    advance_ms(200).await;
    // Someone else starts playback during the window.
    store.set_paused(false);
    controller.wait_idle().await;

    assert_eq!(store.intents(), vec![MediaIntent::PlayRequest]);
}

#[tokio::test(start_paused = true)]
async fn test_dispatch_policy_reads_latest_value() {
    let store = RecordingStore::new(true);
    let controller = TransitionController::builder()
        .with_intent_policy(IntentPolicy::ResolvedAtDispatch)
        .build(store.clone())
        .unwrap();

    controller.request_toggle();
    advance_ms(200).await;
    store.set_paused(false);
    controller.wait_idle().await;

    assert_eq!(store.intents(), vec![MediaIntent::PauseRequest]);
}

#[tokio::test(start_paused = true)]
async fn test_custom_delay_is_honoured() {
    let store = RecordingStore::new(false);
    let controller = TransitionController::builder()
        .with_transition_delay(Duration::from_millis(120))
        .build(store.clone())
        .unwrap();
    let start = Instant::now();

    controller.request_toggle();
    controller.wait_idle().await;

    assert_eq!(store.intents(), vec![MediaIntent::PauseRequest]);
    assert_eq!(store.dispatch_times(), vec![start + Duration::from_millis(120)]);
}

#[tokio::test(start_paused = true)]
async fn test_simulated_store_loading_outlasting_window() {
    let store = Arc::new(SimulatedMediaStore::new(SimulationConfig {
        duration: Duration::from_secs(60),
        load_latency: Duration::from_millis(300),
    }));
    let controller = TransitionController::builder().build(store.clone()).unwrap();

    controller.request_toggle();
    controller.wait_idle().await;

    // The window is closed but the element is still loading.
    assert!(!controller.is_transitioning());
    let view = controller.view();
    assert!(!view.paused);
    assert!(view.loading);
    assert_eq!(view.visual_status, VisualStatus::Loading);

    store.advance(Duration::from_millis(300));
    assert_eq!(controller.visual_status(), VisualStatus::Playing);
}

#[tokio::test(start_paused = true)]
async fn test_simulated_store_loading_shorter_than_window() {
    let store = Arc::new(SimulatedMediaStore::new(SimulationConfig {
        duration: Duration::from_secs(60),
        load_latency: Duration::ZERO,
    }));
    let controller = TransitionController::builder().build(store.clone()).unwrap();

    controller.request_toggle();
    advance_ms(250).await;
    assert_eq!(controller.visual_status(), VisualStatus::Loading);

    controller.wait_idle().await;
    assert_eq!(controller.visual_status(), VisualStatus::Playing);
}

#[test]
fn test_zero_delay_configuration_error() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    let _guard = runtime.enter();

    let store = RecordingStore::new(true);
    let result = TransitionController::builder()
        .with_transition_delay(Duration::ZERO)
        .build(store);

    assert!(matches!(result, Err(PlayerError::ConfigurationError(_))));
}
