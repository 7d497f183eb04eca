//! Listener: memoized, dependency-tracked observation of one store.

use std::any::Any;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::model::{Action, Reducer, State};
use crate::store::{Store, StoreEvent};

use super::config::{Filter, ListenerConfig};
use super::id::ListenerId;
use super::selector::{DependencySelector, OutputSelector};

/// Memoizing observer of one store.
///
/// A listener binds a store to an ordered set of dependency selectors and
/// one output selector, and recomputes the output only when a tracked
/// dependency reports a change. It is driven by its owner through a
/// two-phase contract, repeatable any number of times:
///
/// 1. [`update`](Listener::update) — refresh the construction parameters
///    (identity, label, filter, selectors);
/// 2. [`listen`](Listener::listen) — observe a store's publications on a
///    background task, cancelling any previous observation.
///
/// [`output`](Listener::output) is always readable and never recomputes:
/// it returns whatever the most recent computation produced.
///
/// `update` and `listen` are meant to be called by one logical owner at a
/// time; the internal lock only bridges the owner and the observation
/// task.
pub struct Listener<S, A, O> {
    core: Arc<Mutex<Core<S, A, O>>>,
}

struct Core<S, A, O> {
    id: Option<ListenerId>,
    label: Option<String>,
    filter: Option<Filter<S, A>>,
    dependencies: Vec<DependencySelector<S>>,
    output_selector: OutputSelector<S, O>,
    /// One slot per dependency selector, positionally keyed. `None` means
    /// the slot has not observed a value under the current identity.
    dependency_cache: Vec<Option<Box<dyn Any + Send>>>,
    /// Invariant: consistent with the dependency values that were last
    /// used to compute it — never a stale output next to fresh slots.
    output: Option<O>,
    /// Most recent state seen by the observation task, kept so an
    /// identity reset can re-evaluate without waiting for a dispatch.
    last_state: Option<Arc<S>>,
    revision_tx: watch::Sender<u64>,
    observed_tx: watch::Sender<u64>,
    task: Option<JoinHandle<()>>,
}

impl<S, A, O> Listener<S, A, O>
where
    S: State,
    A: Action,
    O: Clone + Send + 'static,
{
    /// Create a listener from its initial parameters.
    ///
    /// Nothing is computed until the listener observes a state, either
    /// through [`listen`](Listener::listen) or through an identity reset
    /// in a later [`update`](Listener::update).
    pub fn new(config: ListenerConfig<S, A, O>) -> Self {
        let (revision_tx, _) = watch::channel(0);
        let (observed_tx, _) = watch::channel(0);
        let dependency_cache = config.dependencies.iter().map(|_| None).collect();
        Self {
            core: Arc::new(Mutex::new(Core {
                id: config.id,
                label: config.label,
                filter: config.filter,
                dependencies: config.dependencies,
                output_selector: config.output,
                dependency_cache,
                output: None,
                last_state: None,
                revision_tx,
                observed_tx,
                task: None,
            })),
        }
    }

    /// Refresh the listener's parameters.
    ///
    /// With an unchanged identity this only swaps closures: the caches
    /// are retained positionally (truncated or extended if the dependency
    /// count changed) and nothing is recomputed — new parameters govern
    /// *future* decisions only.
    ///
    /// A changed identity discards every cached dependency value and the
    /// cached output, then re-evaluates against the most recently
    /// observed state with the new selectors, so the fresh identity never
    /// reads the old one's cache and an unchanged store state still
    /// produces an output.
    pub fn update(&self, config: ListenerConfig<S, A, O>) {
        self.core.lock().apply_update(config);
    }

    /// Observe `store`, cancelling any previous observation.
    ///
    /// Subscribes to the store's publication stream and processes it on a
    /// spawned task; the first processed event is a replay of the store's
    /// current state. Dropping the listener aborts the task.
    pub fn listen<R>(&self, store: &Store<R>)
    where
        R: Reducer<State = S, Action = A>,
    {
        let mut events = store.events();
        let core = Arc::clone(&self.core);
        let mut guard = self.core.lock();
        if let Some(task) = guard.task.take() {
            task.abort();
        }
        guard.task = Some(tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                core.lock().observe(event);
            }
        }));
    }

    /// The latest computed output.
    ///
    /// Never recomputes; `None` only before the first computation.
    pub fn output(&self) -> Option<O> {
        self.core.lock().output.clone()
    }

    /// Watch the output revision.
    ///
    /// The revision bumps only when a recomputed output is adopted (its
    /// change predicate returned `true`), so a view-binding layer can
    /// await it to schedule redraws without spurious wakeups.
    pub fn changes(&self) -> watch::Receiver<u64> {
        self.core.lock().revision_tx.subscribe()
    }

    /// Watch the count of processed publications.
    ///
    /// Bumps once per publication this listener finished processing,
    /// recomputed or not — including filtered ones. Lets tests and
    /// diagnostics await quiescence deterministically.
    pub fn observed(&self) -> watch::Receiver<u64> {
        self.core.lock().observed_tx.subscribe()
    }
}

impl<S, A, O> Drop for Listener<S, A, O> {
    fn drop(&mut self) {
        if let Some(task) = self.core.lock().task.take() {
            task.abort();
        }
    }
}

impl<S, A, O> Core<S, A, O> {
    fn apply_update(&mut self, config: ListenerConfig<S, A, O>) {
        let identity_changed = self.id != config.id;
        self.label = config.label;
        self.filter = config.filter;
        self.dependencies = config.dependencies;
        self.output_selector = config.output;
        if identity_changed {
            self.id = config.id;
            self.output = None;
            self.dependency_cache.clear();
        }
        // Positional slots: keep what survives a rebinding, open empty
        // (stale) slots when the list grew.
        self.dependency_cache
            .resize_with(self.dependencies.len(), || None);
        if identity_changed {
            tracing::debug!(
                label = self.label.as_deref().unwrap_or(""),
                "listener identity changed; caches dropped"
            );
            if let Some(state) = self.last_state.clone() {
                self.evaluate(&state);
            }
        }
    }

    fn observe(&mut self, event: StoreEvent<S, A>) {
        match event {
            // The replay carries no action, so the filter cannot apply.
            StoreEvent::Replay { state } => {
                self.evaluate(&state);
                self.last_state = Some(state);
            }
            StoreEvent::Dispatch {
                prior,
                action,
                state,
            } => {
                let skip = match &self.filter {
                    Some(filter) => !filter(&prior, &action),
                    None => false,
                };
                if skip {
                    tracing::trace!(
                        label = self.label.as_deref().unwrap_or(""),
                        "publication filtered; selectors skipped"
                    );
                } else {
                    self.evaluate(&state);
                }
                self.last_state = Some(state);
            }
        }
        self.observed_tx.send_modify(|count| *count += 1);
    }

    /// Dependency evaluation and output recomputation for one state.
    ///
    /// Every dependency selector runs and every cache slot is refreshed,
    /// whether or not the output is recomputed — staleness detection must
    /// always compare against the most recent state. The output runs only
    /// when some dependency changed, a slot was empty, or no dependencies
    /// are tracked at all; it becomes visible only when its own change
    /// predicate accepts it.
    fn evaluate(&mut self, state: &S) {
        let mut stale = false;
        for (slot, dependency) in self.dependency_cache.iter_mut().zip(&self.dependencies) {
            let next = dependency.select(state);
            stale |= match slot {
                Some(prev) => dependency.did_change(prev.as_ref(), next.as_ref()),
                None => true,
            };
            *slot = Some(next);
        }
        if !stale && !self.dependencies.is_empty() {
            tracing::trace!(
                label = self.label.as_deref().unwrap_or(""),
                "dependencies unchanged; output retained"
            );
            return;
        }
        let next = self.output_selector.select(state);
        let adopt = match &self.output {
            Some(prev) => self.output_selector.did_change(prev, &next),
            None => true,
        };
        if adopt {
            self.output = Some(next);
            self.revision_tx.send_modify(|revision| *revision += 1);
            tracing::trace!(
                label = self.label.as_deref().unwrap_or(""),
                "output recomputed and adopted"
            );
        } else {
            tracing::trace!(
                label = self.label.as_deref().unwrap_or(""),
                "output recomputed but unchanged"
            );
        }
    }
}
