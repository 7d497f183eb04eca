mod common;

use std::time::Duration;

use common::{CounterAction, CounterError, CounterReducer, CounterState};
use flowstate::Store;

#[test]
fn dispatch_applies_reducer_in_order() {
    common::init_tracing();
    let store = Store::<CounterReducer>::new(CounterState::at(0));
    store.dispatch(CounterAction::Increment).unwrap();
    store.dispatch(CounterAction::Increment).unwrap();
    store.dispatch(CounterAction::Decrement).unwrap();
    assert_eq!(store.state().value, 1);
}

#[test]
fn rejected_action_returns_error_and_keeps_state() {
    let store = Store::<CounterReducer>::new(CounterState::at(0));
    let err = store.dispatch(CounterAction::Decrement).unwrap_err();
    assert_eq!(err, CounterError::Underflow);
    assert_eq!(store.state().value, 0);

    // Failures are retryable: the same store keeps working.
    store.dispatch(CounterAction::Increment).unwrap();
    store.dispatch(CounterAction::Decrement).unwrap();
    assert_eq!(store.state().value, 0);
}

#[tokio::test]
async fn rejected_action_publishes_nothing() {
    let store = Store::<CounterReducer>::new(CounterState::at(0));
    let mut states = store.subscribe();
    assert_eq!(states.recv().await.unwrap().value, 0);

    store.dispatch(CounterAction::Decrement).unwrap_err();
    let nothing = tokio::time::timeout(Duration::from_millis(50), states.recv()).await;
    assert!(nothing.is_err(), "failed dispatch must not publish");

    // The next successful dispatch is the next value, with no gap.
    store.dispatch(CounterAction::Increment).unwrap();
    assert_eq!(states.recv().await.unwrap().value, 1);
}

#[tokio::test]
async fn all_subscribers_observe_the_same_sequence() {
    let store = Store::<CounterReducer>::new(CounterState::at(0));
    let mut first = store.subscribe();
    let mut second = store.subscribe();

    store.dispatch(CounterAction::Increment).unwrap();
    store.dispatch(CounterAction::Increment).unwrap();
    store.dispatch(CounterAction::Decrement).unwrap();

    let mut seen_first = Vec::new();
    let mut seen_second = Vec::new();
    for _ in 0..4 {
        seen_first.push(first.recv().await.unwrap().value);
        seen_second.push(second.recv().await.unwrap().value);
    }
    assert_eq!(seen_first, vec![0, 1, 2, 1]);
    assert_eq!(seen_second, seen_first);
}
