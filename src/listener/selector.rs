//! Selector descriptors: pure projections paired with change predicates.

use std::any::Any;

type ErasedSelect<S> = Box<dyn Fn(&S) -> Box<dyn Any + Send> + Send + Sync>;
type ErasedCompare = Box<dyn Fn(&dyn Any, &dyn Any) -> bool + Send + Sync>;

/// A tracked dependency: a pure projection of state plus a change
/// predicate, used as an invalidation key for a listener's output.
///
/// The concrete dependency type is erased at construction, so one
/// listener can track any number of heterogeneously-typed dependencies;
/// position in the dependency list is the stable cache-slot identity.
pub struct DependencySelector<S> {
    select: ErasedSelect<S>,
    did_change: ErasedCompare,
}

impl<S> DependencySelector<S> {
    /// Pair a projection with its change predicate.
    ///
    /// `did_change` receives the previously cached value and the newly
    /// selected one; returning `true` marks the listener's dependencies
    /// stale. The predicate may be identity-based rather than structural.
    /// Both closures must be pure; a panic inside one propagates.
    pub fn new<D, F, C>(select: F, did_change: C) -> Self
    where
        D: Send + 'static,
        F: Fn(&S) -> D + Send + Sync + 'static,
        C: Fn(&D, &D) -> bool + Send + Sync + 'static,
    {
        DependencySelector {
            select: Box::new(move |state| Box::new(select(state))),
            did_change: Box::new(move |prev, next| {
                match (prev.downcast_ref::<D>(), next.downcast_ref::<D>()) {
                    (Some(prev), Some(next)) => did_change(prev, next),
                    // A slot whose concrete type changed between updates
                    // cannot be compared; report it as changed.
                    _ => true,
                }
            }),
        }
    }

    pub(super) fn select(&self, state: &S) -> Box<dyn Any + Send> {
        (self.select)(state)
    }

    pub(super) fn did_change(&self, prev: &dyn Any, next: &dyn Any) -> bool {
        (self.did_change)(prev, next)
    }
}

/// The externally visible projection: computes a listener's output and
/// decides whether a recomputed value replaces the cached one.
pub struct OutputSelector<S, O> {
    select: Box<dyn Fn(&S) -> O + Send + Sync>,
    did_change: Box<dyn Fn(&O, &O) -> bool + Send + Sync>,
}

impl<S, O> OutputSelector<S, O> {
    /// Pair the output projection with its change predicate.
    ///
    /// A recomputed output replaces the visible one only when
    /// `did_change(previous, next)` returns `true`, so a dependency
    /// change that happens to produce an equal output stays invisible to
    /// consumers.
    pub fn new<F, C>(select: F, did_change: C) -> Self
    where
        F: Fn(&S) -> O + Send + Sync + 'static,
        C: Fn(&O, &O) -> bool + Send + Sync + 'static,
    {
        OutputSelector {
            select: Box::new(select),
            did_change: Box::new(did_change),
        }
    }

    pub(super) fn select(&self, state: &S) -> O {
        (self.select)(state)
    }

    pub(super) fn did_change(&self, prev: &O, next: &O) -> bool {
        (self.did_change)(prev, next)
    }
}
