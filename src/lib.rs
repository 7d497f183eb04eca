//! Unidirectional data flow state container.
//!
//! One authoritative, immutable application state, mutated only through a
//! pure reducer applied to dispatched actions, observed by any number of
//! independent listeners that each derive a memoized, dependency-tracked
//! projection of it.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Dispatcher ──→ Store ──→ Reducer ──→ new State
//!                             │
//!                             ├──→ subscriber streams (ordered fan-out)
//!                             └──→ Listener ──→ memoized Output ──→ consumers
//! ```
//!
//! - **[`Store`]**: owns the current state; serializes every dispatch and
//!   publishes each new state to all subscribers in a stable order
//! - **[`Listener`]**: recomputes its derived output only when a tracked
//!   dependency actually changed, per caller-supplied predicates
//! - **[`Dispatcher`]**: forwarding handle for submitting actions
//!
//! # Example
//!
//! ```
//! use flowstate::{Action, Dispatcher, Listener, ListenerConfig};
//! use flowstate::{OutputSelector, Reducer, State, Store};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Counter(i64);
//! impl State for Counter {}
//!
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//! impl Action for CounterAction {}
//!
//! struct CounterReducer;
//! impl Reducer for CounterReducer {
//!     type State = Counter;
//!     type Action = CounterAction;
//!     type Error = std::convert::Infallible;
//!
//!     fn reduce(state: Counter, action: &CounterAction) -> Result<Counter, Self::Error> {
//!         Ok(match action {
//!             CounterAction::Increment => Counter(state.0 + 1),
//!             CounterAction::Decrement => Counter(state.0 - 1),
//!         })
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = Store::<CounterReducer>::new(Counter(0));
//! let dispatcher = Dispatcher::new(store.clone());
//!
//! let listener = Listener::new(ListenerConfig::new(OutputSelector::new(
//!     |state: &Counter| state.0,
//!     |a, b| a != b,
//! )));
//! let mut observed = listener.observed();
//! listener.listen(&store);
//!
//! dispatcher.dispatch(CounterAction::Increment).unwrap();
//! observed.wait_for(|count| *count >= 2).await.unwrap();
//! assert_eq!(listener.output(), Some(1));
//! # }
//! ```

pub mod dispatcher;
pub mod listener;
pub mod model;
pub mod store;

pub use dispatcher::Dispatcher;
pub use listener::{DependencySelector, Listener, ListenerConfig, ListenerId, OutputSelector};
pub use model::{Action, Reducer, State};
pub use store::{Events, States, Store, StoreEvent};
