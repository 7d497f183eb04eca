//! Marker trait for state snapshots.

/// Marker trait for application state snapshots.
///
/// States should be:
/// - Immutable (Clone to produce successors; never mutated in place)
/// - Self-contained (everything an observer needs to derive its output)
/// - Freely shareable across threads once published
///
/// Equality is deliberately not required: every comparison in this crate
/// goes through a caller-supplied predicate, because structural equality
/// is not always correct or affordable for derived values.
pub trait State: Clone + Send + Sync + 'static {}
