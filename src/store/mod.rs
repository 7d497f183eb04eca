//! Authoritative state container with serialized dispatch and ordered
//! fan-out.
//!
//! A [`Store`] owns exactly one current state. All mutation goes through
//! [`Store::dispatch`], which applies the application's reducer and
//! publishes the result to every subscriber inside a single critical
//! section, so concurrent dispatches never interleave and every observer
//! sees the same total order of states.
//!
//! Observation is asynchronous and cancellable: [`Store::subscribe`]
//! yields states, [`Store::events`] additionally carries the action that
//! produced each state. Both replay the current state first, buffer
//! per-subscriber, and deregister when dropped.

mod event;
mod store;
mod subscription;

pub use event::StoreEvent;
pub use store::Store;
pub use subscription::{Events, States};
