//! Memoized, dependency-tracked observation of store state.
//!
//! A [`Listener`] derives one output value from a store's state and keeps
//! it current at the lowest cost it can get away with:
//!
//! ```text
//! publication ──→ filter? ──→ dependency selectors ──→ output selector
//!                  (skip)      (any changed?)           (did it differ?)
//! ```
//!
//! - a **filter** discards publications whose action is known to be
//!   irrelevant, before any selector runs;
//! - **dependency selectors** are cheap projections compared against
//!   their cached values with caller-supplied predicates; only a change
//!   there pays for the output selector;
//! - the **output selector** produces the visible value, which replaces
//!   the cached one only when its own change predicate accepts it.
//!
//! Caches are scoped to an optional identity, so switching which logical
//! entity a listener observes discards the previous entity's values.

mod config;
mod id;
mod listener;
mod selector;

pub use config::ListenerConfig;
pub use id::ListenerId;
pub use listener::Listener;
pub use selector::{DependencySelector, OutputSelector};
