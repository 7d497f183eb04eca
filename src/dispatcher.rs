//! Thin forwarding handle for submitting actions to a store.

use crate::model::Reducer;
use crate::store::Store;

/// Forwards actions to a [`Store`] without handing the call site the rest
/// of the store surface.
///
/// Stateless: no cache and no concurrency behavior of its own. Cloning is
/// cheap and every clone targets the same store.
pub struct Dispatcher<R: Reducer> {
    store: Store<R>,
}

impl<R: Reducer> Dispatcher<R> {
    /// Create a dispatcher targeting `store`.
    pub fn new(store: Store<R>) -> Self {
        Self { store }
    }

    /// Submit `action`, returning the store's outcome unchanged.
    pub fn dispatch(&self, action: R::Action) -> Result<(), R::Error> {
        self.store.dispatch(action)
    }
}

impl<R: Reducer> Clone for Dispatcher<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}
