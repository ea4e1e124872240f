use player::{MediaIntent, MediaStore, SimulatedMediaStore, SimulationConfig};
use std::time::Duration;

fn store(load_latency_ms: u64) -> SimulatedMediaStore {
    SimulatedMediaStore::new(SimulationConfig {
        duration: Duration::from_secs(30),
        load_latency: Duration::from_millis(load_latency_ms),
    })
}

#[test]
fn test_initial_state() {
    let store = store(100);
    let state = store.state();

    assert!(state.paused);
    assert!(!state.loading);
    assert_eq!(state.duration, Duration::from_secs(30));
    assert_eq!(state.current_time, Duration::ZERO);
}

#[test]
fn test_clones_share_the_element() {
    let store = store(0);
    let handle = store.clone();

    handle.dispatch(MediaIntent::PlayRequest);
    store.advance(Duration::from_secs(2));

    assert!(!handle.state().paused);
    assert_eq!(handle.state().current_time, Duration::from_secs(2));
}

#[test]
fn test_playback_runs_to_the_end() {
    let store = store(100);
    store.dispatch(MediaIntent::PlayRequest);
    assert!(store.state().loading);

    store.advance(Duration::from_millis(100));
    assert!(!store.state().loading);

    for _ in 0..40 {
        store.advance(Duration::from_secs(1));
    }

    let state = store.state();
    assert!(state.paused);
    assert!(state.ended());
    assert_eq!(state.current_time, Duration::from_secs(30));
}

#[test]
fn test_seek_volume_and_mute_intents() {
    let store = store(0);

    store.dispatch(MediaIntent::SeekRequest(Duration::from_secs(12)));
    store.dispatch(MediaIntent::volume(0.25).unwrap());
    store.dispatch(MediaIntent::MuteRequest);

    store.with_state(|state| {
        assert_eq!(state.current_time, Duration::from_secs(12));
        assert_eq!(state.volume, 0.25);
        assert!(state.muted);
    });
}
