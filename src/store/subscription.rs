//! Subscription streams produced by [`Store`](super::Store).

use std::pin::Pin;
use std::sync::{Arc, Weak};
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::mpsc;

use super::event::StoreEvent;
use super::store::Shared;

/// Stream of store publications, actions included.
///
/// Values arrive in dispatch order and buffer in an unbounded
/// per-subscriber queue, so a slow consumer never stalls the store or
/// other subscribers. Dropping the stream deregisters the subscription
/// immediately.
pub struct Events<S, A> {
    rx: mpsc::UnboundedReceiver<StoreEvent<S, A>>,
    shared: Weak<Shared<S, A>>,
    id: u64,
}

impl<S, A> Events<S, A> {
    pub(super) fn new(
        rx: mpsc::UnboundedReceiver<StoreEvent<S, A>>,
        shared: Weak<Shared<S, A>>,
        id: u64,
    ) -> Self {
        Self { rx, shared, id }
    }

    /// Receive the next publication.
    ///
    /// Returns `None` once the store has been dropped and every buffered
    /// publication was consumed.
    pub async fn recv(&mut self) -> Option<StoreEvent<S, A>> {
        self.rx.recv().await
    }

    /// Poll for the next publication.
    pub fn poll_recv(&mut self, cx: &mut Context<'_>) -> Poll<Option<StoreEvent<S, A>>> {
        self.rx.poll_recv(cx)
    }
}

impl<S, A> Drop for Events<S, A> {
    fn drop(&mut self) {
        // Eager deregistration: cancellation is local and must not leave a
        // dead sender in the fan-out list until the next dispatch.
        if let Some(shared) = self.shared.upgrade() {
            shared.inner.lock().remove_subscriber(self.id);
            tracing::debug!(subscriber = self.id, "subscriber removed");
        }
    }
}

impl<S, A> Stream for Events<S, A> {
    type Item = StoreEvent<S, A>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().poll_recv(cx)
    }
}

/// Stream of states: one per successful dispatch, after an initial replay
/// of the state current at subscription time.
pub struct States<S, A> {
    events: Events<S, A>,
}

impl<S, A> States<S, A> {
    pub(super) fn new(events: Events<S, A>) -> Self {
        Self { events }
    }

    /// Receive the next state.
    ///
    /// Returns `None` once the store has been dropped and every buffered
    /// state was consumed.
    pub async fn recv(&mut self) -> Option<Arc<S>> {
        self.events
            .recv()
            .await
            .map(|event| Arc::clone(event.state()))
    }
}

impl<S, A> Stream for States<S, A> {
    type Item = Arc<S>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match self.get_mut().events.poll_recv(cx) {
            Poll::Ready(Some(event)) => Poll::Ready(Some(Arc::clone(event.state()))),
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
