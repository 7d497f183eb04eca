//! Parameter set for a listener observation cycle.

use super::id::ListenerId;
use super::selector::{DependencySelector, OutputSelector};

pub(super) type Filter<S, A> = Box<dyn Fn(&S, &A) -> bool + Send + Sync>;

/// Parameters accepted by [`Listener::update`](super::Listener::update).
///
/// Built fresh by the listener's owner on each observation cycle.
/// Everything except the output selector is optional; dependencies are
/// tracked in the order they are added.
pub struct ListenerConfig<S, A, O> {
    pub(super) id: Option<ListenerId>,
    pub(super) label: Option<String>,
    pub(super) filter: Option<Filter<S, A>>,
    pub(super) dependencies: Vec<DependencySelector<S>>,
    pub(super) output: OutputSelector<S, O>,
}

impl<S, A, O> ListenerConfig<S, A, O> {
    /// Start a configuration from the output selector.
    pub fn new(output: OutputSelector<S, O>) -> Self {
        Self {
            id: None,
            label: None,
            filter: None,
            dependencies: Vec::new(),
            output,
        }
    }

    /// Scope the listener's caches to an identity.
    ///
    /// When the identity differs from the previous update's (including a
    /// switch between having an id and not having one), every cached
    /// dependency value and the cached output are discarded before
    /// anything else happens, so one entity's derived values never leak
    /// into another's.
    pub fn id<T>(mut self, id: T) -> Self
    where
        T: PartialEq + Send + Sync + 'static,
    {
        self.id = Some(ListenerId::new(id));
        self
    }

    /// Human-readable label attached to this listener's log events.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Coarse pre-filter over `(prior state, action)`.
    ///
    /// Returning `false` skips every selector for that publication.
    /// Err toward `true` when unsure: a wrongly-false filter freezes the
    /// output while the state moves on.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&S, &A) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Track a dependency. The order of `dependency` calls is the
    /// positional cache-slot order across updates.
    pub fn dependency(mut self, dependency: DependencySelector<S>) -> Self {
        self.dependencies.push(dependency);
        self
    }
}
