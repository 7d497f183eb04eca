//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use flowstate::{Action, Reducer, State};
use thiserror::Error;

/// Opt-in log output: `RUST_LOG=flowstate=trace cargo test -- --nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterState {
    pub value: i64,
}

impl CounterState {
    pub fn at(value: i64) -> Self {
        Self { value }
    }
}

impl State for CounterState {}

#[derive(Debug)]
pub enum CounterAction {
    Increment,
    Decrement,
    Set(i64),
}

impl Action for CounterAction {}

#[derive(Debug, Error, PartialEq)]
pub enum CounterError {
    #[error("counter cannot go below zero")]
    Underflow,
}

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Error = CounterError;

    fn reduce(state: CounterState, action: &CounterAction) -> Result<CounterState, CounterError> {
        match action {
            CounterAction::Increment => Ok(CounterState::at(state.value + 1)),
            CounterAction::Decrement if state.value == 0 => Err(CounterError::Underflow),
            CounterAction::Decrement => Ok(CounterState::at(state.value - 1)),
            CounterAction::Set(value) => Ok(CounterState::at(*value)),
        }
    }
}

/// Wrap a selector projection so each invocation bumps `calls`.
pub fn counted<S, D>(
    calls: &Arc<AtomicUsize>,
    select: impl Fn(&S) -> D + Send + Sync + 'static,
) -> impl Fn(&S) -> D + Send + Sync + 'static {
    let calls = Arc::clone(calls);
    move |state| {
        calls.fetch_add(1, Ordering::SeqCst);
        select(state)
    }
}
