//! The store: serialized mutation and ordered fan-out.

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::model::Reducer;

use super::event::StoreEvent;
use super::subscription::{Events, States};

/// Single authoritative state container.
///
/// Owns the current state, the reducer contract and the ordered
/// subscriber registry behind one exclusive critical section:
/// [`dispatch`](Store::dispatch) reads the current state, applies the
/// reducer, replaces the state and fans out to subscribers as one atomic
/// unit. Concurrent dispatches never interleave their reducer
/// applications, and every subscriber observes the same total order of
/// states.
///
/// Cloning a `Store` produces another handle to the same container.
pub struct Store<R: Reducer> {
    shared: Arc<Shared<R::State, R::Action>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            _reducer: PhantomData,
        }
    }
}

pub(super) struct Shared<S, A> {
    pub(super) inner: Mutex<Inner<S, A>>,
}

pub(super) struct Inner<S, A> {
    /// `None` only for placeholder stores.
    current: Option<Arc<S>>,
    /// Fan-out walks this in subscription order.
    subscribers: Vec<Subscriber<S, A>>,
    next_subscriber: u64,
}

struct Subscriber<S, A> {
    id: u64,
    tx: mpsc::UnboundedSender<StoreEvent<S, A>>,
}

impl<R: Reducer> Store<R> {
    /// Create a store owning `initial`.
    pub fn new(initial: R::State) -> Self {
        Self::from_current(Some(Arc::new(initial)))
    }

    /// Create a placeholder store for default wiring.
    ///
    /// Every operation on a placeholder panics. A placeholder reaching
    /// runtime means a real store was never injected, which is a wiring
    /// bug rather than a recoverable condition.
    pub fn placeholder() -> Self {
        Self::from_current(None)
    }

    fn from_current(current: Option<Arc<R::State>>) -> Self {
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    current,
                    subscribers: Vec::new(),
                    next_subscriber: 0,
                }),
            }),
            _reducer: PhantomData,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> Arc<R::State> {
        self.shared.inner.lock().live_state()
    }

    /// Apply the reducer to the current state and `action`.
    ///
    /// On success the produced state replaces the current one and is
    /// published to every subscriber in subscription order. On rejection
    /// the domain error is returned and nothing changes: no publication,
    /// no state replacement, so failed dispatches are safely retryable.
    pub fn dispatch(&self, action: R::Action) -> Result<(), R::Error> {
        let action = Arc::new(action);
        let mut inner = self.shared.inner.lock();
        let prior = inner.live_state();
        let next = match R::reduce((*prior).clone(), &action) {
            Ok(next) => Arc::new(next),
            Err(err) => {
                tracing::debug!(error = %err, "reducer rejected action; state unchanged");
                return Err(err);
            }
        };
        inner.current = Some(Arc::clone(&next));
        tracing::trace!(
            subscribers = inner.subscribers.len(),
            "dispatch applied; publishing"
        );
        inner.publish(StoreEvent::Dispatch {
            prior,
            action,
            state: next,
        });
        Ok(())
    }

    /// Subscribe to the stream of states.
    ///
    /// The first value is the state current at subscription time, then one
    /// value per successful dispatch, in dispatch order. Dropping the
    /// stream cancels the subscription with no effect on the store or
    /// other subscribers.
    pub fn subscribe(&self) -> States<R::State, R::Action> {
        States::new(self.events())
    }

    /// Subscribe to the stream of publications, actions included.
    ///
    /// This is the stream a [`Listener`](crate::listener::Listener)
    /// consumes: a replay of the current state first, then for every
    /// successful dispatch the prior state, the action and the resulting
    /// state — enough for an observer to pre-filter on `(prior, action)`
    /// without evaluating any selectors.
    pub fn events(&self) -> Events<R::State, R::Action> {
        let mut inner = self.shared.inner.lock();
        let current = inner.live_state();
        let id = inner.next_subscriber;
        inner.next_subscriber += 1;
        let (tx, rx) = mpsc::unbounded_channel();
        // Queue the replay before registering: it must precede any
        // dispatch published after the lock is released.
        let _ = tx.send(StoreEvent::Replay { state: current });
        inner.subscribers.push(Subscriber { id, tx });
        tracing::debug!(
            subscriber = id,
            total = inner.subscribers.len(),
            "subscriber added"
        );
        Events::new(rx, Arc::downgrade(&self.shared), id)
    }
}

impl<S, A> Inner<S, A> {
    fn live_state(&self) -> Arc<S> {
        match &self.current {
            Some(state) => Arc::clone(state),
            None => {
                tracing::error!(
                    "placeholder store used; inject a real store before dispatching or subscribing"
                );
                panic!("placeholder store used; inject a real store before dispatching or subscribing");
            }
        }
    }

    fn publish(&mut self, event: StoreEvent<S, A>) {
        // Stable fan-out: subscription order, gone subscribers pruned.
        self.subscribers.retain(|subscriber| {
            if subscriber.tx.send(event.clone()).is_err() {
                tracing::trace!(
                    subscriber = subscriber.id,
                    "publication dropped (subscriber gone)"
                );
                false
            } else {
                true
            }
        });
    }

    pub(super) fn remove_subscriber(&mut self, id: u64) {
        self.subscribers.retain(|subscriber| subscriber.id != id);
    }
}
