//! End-to-end counter scenario: dispatcher, store, subscriber and
//! listener wired together the way an application would.

mod common;

use common::{CounterAction, CounterReducer, CounterState};
use flowstate::{Dispatcher, Listener, ListenerConfig, OutputSelector, Store};

#[tokio::test]
async fn counter_round_trip_publishes_the_expected_sequences() {
    common::init_tracing();
    let store = Store::<CounterReducer>::new(CounterState::at(0));
    let dispatcher = Dispatcher::new(store.clone());
    let mut states = store.subscribe();

    let listener = Listener::new(
        ListenerConfig::new(OutputSelector::new(
            |state: &CounterState| state.value,
            |a, b| a != b,
        ))
        .label("counter"),
    );
    let mut observed = listener.observed();
    listener.listen(&store);

    let mut outputs = Vec::new();
    observed.wait_for(|count| *count >= 1).await.unwrap();
    outputs.push(listener.output().unwrap());

    for (step, action) in [
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Decrement,
    ]
    .into_iter()
    .enumerate()
    {
        dispatcher.dispatch(action).unwrap();
        let processed = step as u64 + 2;
        observed.wait_for(|count| *count >= processed).await.unwrap();
        outputs.push(listener.output().unwrap());
    }

    // Subscribers and the listener both see 0, 1, 2, 1.
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(states.recv().await.unwrap().value);
    }
    assert_eq!(seen, vec![0, 1, 2, 1]);
    assert_eq!(outputs, vec![0, 1, 2, 1]);
    assert_eq!(store.state().value, 1);
}
