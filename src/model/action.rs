//! Marker trait for dispatched actions.

/// Marker trait for action values.
///
/// Actions represent:
/// - User interactions (button clicks, key presses)
/// - System events (timer fired, response arrived)
///
/// Actions carry data, never behavior. They are processed by a
/// [`Reducer`](super::Reducer) to produce new states. The store shares a
/// dispatched action with every observer, so `Clone` is not required.
pub trait Action: Send + Sync + 'static {}
