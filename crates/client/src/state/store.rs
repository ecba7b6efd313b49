//! Store: single-writer container for one state slice
//!
//! `dispatch` applies the slice's pure transition function copy-on-write
//! and notifies change listeners only when the value actually changed, so a
//! rejected add or a remove of an absent id produces no re-render signal.
//! Listeners are invoked after the state lock is released; a listener may
//! itself read the store or dispatch.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// A reducer-backed state slice.
///
/// `apply` must be pure: same inputs, same output, no side effects. Side
/// effects that depend on the previous state (notification sounds and the
/// like) belong in the message handler, decided before dispatching.
pub trait Slice: Clone + PartialEq + Send + 'static {
    type Action;

    #[must_use]
    fn apply(&self, action: Self::Action) -> Self;
}

/// Receipt for a registered change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerToken(Uuid);

type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

struct Inner<S> {
    state: S,
    listeners: Vec<(ListenerToken, Listener<S>)>,
}

/// Shared handle to a slice. Clones share the same state.
pub struct Store<S: Slice> {
    inner: Arc<Mutex<Inner<S>>>,
}

impl<S: Slice> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Slice + Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Slice> Store<S> {
    pub fn new(state: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state,
                listeners: Vec::new(),
            })),
        }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> S {
        self.lock().state.clone()
    }

    /// Apply `action` through the slice's transition function.
    ///
    /// Listeners fire only if the resulting value differs from the previous
    /// one, and they fire outside the state lock.
    pub fn dispatch(&self, action: S::Action) {
        let notify = {
            let mut inner = self.lock();
            let next = inner.state.apply(action);

            if next == inner.state {
                None
            } else {
                inner.state = next.clone();
                let listeners: Vec<Listener<S>> =
                    inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
                Some((next, listeners))
            }
        };

        if let Some((state, listeners)) = notify {
            for listener in listeners {
                listener(&state);
            }
        }
    }

    /// Register a change listener. It is not called for the current value.
    pub fn subscribe(&self, listener: impl Fn(&S) + Send + Sync + 'static) -> ListenerToken {
        let token = ListenerToken(Uuid::new_v4());
        self.lock().listeners.push((token, Arc::new(listener)));
        token
    }

    /// Remove a change listener. Removing twice is a no-op.
    pub fn unsubscribe(&self, token: ListenerToken) {
        self.lock().listeners.retain(|(t, _)| *t != token);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<S>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
