//! Publication payloads delivered to store subscribers.

use std::sync::Arc;

/// One publication on a store's event stream.
///
/// Everything is `Arc`-shared: states are immutable once published, so a
/// single dispatch fans out to any number of subscribers without copying
/// state or action values.
pub enum StoreEvent<S, A> {
    /// The snapshot delivered when a subscription is established, so late
    /// subscribers never miss the current state.
    Replay {
        /// State current at subscription time.
        state: Arc<S>,
    },
    /// A successful dispatch.
    Dispatch {
        /// State the reducer was applied to.
        prior: Arc<S>,
        /// Action that produced this transition.
        action: Arc<A>,
        /// State produced by the reducer.
        state: Arc<S>,
    },
}

impl<S, A> StoreEvent<S, A> {
    /// The state this publication carries.
    pub fn state(&self) -> &Arc<S> {
        match self {
            StoreEvent::Replay { state } => state,
            StoreEvent::Dispatch { state, .. } => state,
        }
    }
}

// Manual impl: `#[derive(Clone)]` would demand `S: Clone, A: Clone`, but
// only the `Arc`s are cloned here.
impl<S, A> Clone for StoreEvent<S, A> {
    fn clone(&self) -> Self {
        match self {
            StoreEvent::Replay { state } => StoreEvent::Replay {
                state: Arc::clone(state),
            },
            StoreEvent::Dispatch {
                prior,
                action,
                state,
            } => StoreEvent::Dispatch {
                prior: Arc::clone(prior),
                action: Arc::clone(action),
                state: Arc::clone(state),
            },
        }
    }
}
