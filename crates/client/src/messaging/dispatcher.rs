//! Per-kind publish/subscribe dispatcher
//!
//! `EventDispatcher` is the leaf primitive of the sync core: handlers
//! register for one event kind and `dispatch` invokes every handler
//! currently registered for that kind, synchronously, in registration
//! order. The registry lock is never held across a handler call, so a
//! handler may itself subscribe, unsubscribe or dispatch.
//!
//! One documented race: `dispatch` snapshots the handler list before
//! iterating, so a handler unsubscribed re-entrantly during a dispatch may
//! still see the event already in flight - at most one more delivery after
//! unsubscribe is requested mid-dispatch.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// An event that can ride the dispatcher: a stable discriminant plus a
/// payload carried by the value itself.
///
/// One kind maps to exactly one payload shape; consumers match on the
/// event's variant and never probe structure at runtime. Event families
/// (protocol, ui, widget, engine) each get their own dispatcher instance,
/// so kinds from different namespaces cannot collide by construction.
pub trait BusEvent: Send + Sync + 'static {
    type Kind: Copy + Eq + Hash + Send + Sync + fmt::Debug + 'static;

    fn kind(&self) -> Self::Kind;
}

type Handler<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Receipt for one live handler registration.
///
/// Owned by whoever subscribed; pass it back to [`EventDispatcher::unsubscribe`]
/// (or let a [`SubscriptionBinding`] do it) to stop delivery.
///
/// [`SubscriptionBinding`]: crate::messaging::SubscriptionBinding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription<K> {
    id: Uuid,
    kind: K,
}

impl<K: Copy> Subscription<K> {
    pub fn kind(&self) -> K {
        self.kind
    }
}

struct Entry<E: BusEvent> {
    id: Uuid,
    handler: Handler<E>,
}

struct Registry<E: BusEvent> {
    handlers: HashMap<E::Kind, Vec<Entry<E>>>,
}

/// Publish/subscribe registry for one event family.
///
/// Cheap to clone; clones share the registry.
pub struct EventDispatcher<E: BusEvent> {
    inner: Arc<Mutex<Registry<E>>>,
}

impl<E: BusEvent> Clone for EventDispatcher<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: BusEvent> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: BusEvent> EventDispatcher<E> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Registry {
                handlers: HashMap::new(),
            })),
        }
    }

    /// Register `handler` for `kind`. Delivery order follows registration
    /// order within a kind.
    pub fn subscribe(
        &self,
        kind: E::Kind,
        handler: impl Fn(&E) + Send + Sync + 'static,
    ) -> Subscription<E::Kind> {
        self.rebind(None, kind, handler)
    }

    /// Remove a registration. Removing an already-removed subscription is a
    /// no-op. Effective for every dispatch that has not yet snapshotted.
    pub fn unsubscribe(&self, subscription: &Subscription<E::Kind>) {
        let mut registry = self.lock();

        if let Some(entries) = registry.handlers.get_mut(&subscription.kind) {
            entries.retain(|entry| entry.id != subscription.id);
            if entries.is_empty() {
                registry.handlers.remove(&subscription.kind);
            }
        }
    }

    /// Remove `previous` (if any) and register `handler` under one registry
    /// lock, so no dispatch can observe neither or both registrations.
    ///
    /// This is the primitive [`SubscriptionBinding`] builds its atomic
    /// handler swap on.
    ///
    /// [`SubscriptionBinding`]: crate::messaging::SubscriptionBinding
    pub fn rebind(
        &self,
        previous: Option<&Subscription<E::Kind>>,
        kind: E::Kind,
        handler: impl Fn(&E) + Send + Sync + 'static,
    ) -> Subscription<E::Kind> {
        let mut registry = self.lock();

        if let Some(previous) = previous {
            if let Some(entries) = registry.handlers.get_mut(&previous.kind) {
                entries.retain(|entry| entry.id != previous.id);
            }
        }

        let id = Uuid::new_v4();
        registry.handlers.entry(kind).or_default().push(Entry {
            id,
            handler: Arc::new(handler),
        });

        Subscription { id, kind }
    }

    /// Deliver `event` to every handler currently registered for its kind.
    ///
    /// Synchronous, on the calling thread. Zero subscribers is a no-op, not
    /// an error. The handler list is snapshotted before iteration, so
    /// handlers added or removed during delivery do not affect this event.
    pub fn dispatch(&self, event: &E) {
        let snapshot: Vec<Handler<E>> = {
            let registry = self.lock();
            match registry.handlers.get(&event.kind()) {
                Some(entries) => entries.iter().map(|e| Arc::clone(&e.handler)).collect(),
                None => return,
            }
        };

        tracing::trace!(kind = ?event.kind(), handlers = snapshot.len(), "dispatching event");

        for handler in snapshot {
            handler(event);
        }
    }

    /// Number of live registrations for `kind`.
    pub fn handler_count(&self, kind: E::Kind) -> usize {
        self.lock().handlers.get(&kind).map_or(0, Vec::len)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Registry<E>> {
        // Handlers run outside the lock, so the only way to poison it is a
        // panic inside registry bookkeeping itself; recover the map.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    enum TestEvent {
        Ping(u32),
        Pong,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestKind {
        Ping,
        Pong,
    }

    impl BusEvent for TestEvent {
        type Kind = TestKind;

        fn kind(&self) -> TestKind {
            match self {
                Self::Ping(_) => TestKind::Ping,
                Self::Pong => TestKind::Pong,
            }
        }
    }

    #[test]
    fn handlers_only_see_their_kind() {
        let dispatcher = EventDispatcher::new();
        let pings = Arc::new(AtomicU32::new(0));

        let pings_clone = Arc::clone(&pings);
        let _sub = dispatcher.subscribe(TestKind::Ping, move |_event| {
            pings_clone.fetch_add(1, Ordering::SeqCst);
        });

        dispatcher.dispatch(&TestEvent::Ping(1));
        dispatcher.dispatch(&TestEvent::Pong);
        dispatcher.dispatch(&TestEvent::Ping(2));

        assert_eq!(pings.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dispatch_with_no_subscribers_is_a_noop() {
        let dispatcher: EventDispatcher<TestEvent> = EventDispatcher::new();
        dispatcher.dispatch(&TestEvent::Pong);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let dispatcher = EventDispatcher::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = Arc::clone(&count);
        let sub = dispatcher.subscribe(TestKind::Ping, move |_event| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        dispatcher.unsubscribe(&sub);
        dispatcher.dispatch(&TestEvent::Ping(1));

        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(dispatcher.handler_count(TestKind::Ping), 0);
    }

    #[test]
    fn delivery_follows_registration_order() {
        let dispatcher = EventDispatcher::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for label in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            let _sub = dispatcher.subscribe(TestKind::Ping, move |_event| {
                order.lock().expect("order lock").push(label);
            });
        }

        dispatcher.dispatch(&TestEvent::Ping(0));

        assert_eq!(
            *order.lock().expect("order lock"),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn reentrant_subscribe_does_not_see_the_inflight_event() {
        let dispatcher = EventDispatcher::new();
        let late_calls = Arc::new(AtomicU32::new(0));

        let dispatcher_clone = dispatcher.clone();
        let late_calls_clone = Arc::clone(&late_calls);
        let _sub = dispatcher.subscribe(TestKind::Ping, move |_event| {
            let late_calls = Arc::clone(&late_calls_clone);
            // Deliberately leaked: the test only cares that the new handler
            // is not invoked for the event already in flight.
            std::mem::forget(dispatcher_clone.subscribe(TestKind::Ping, move |_event| {
                late_calls.fetch_add(1, Ordering::SeqCst);
            }));
        });

        dispatcher.dispatch(&TestEvent::Ping(1));
        assert_eq!(late_calls.load(Ordering::SeqCst), 0);

        // The next dispatch reaches it.
        dispatcher.dispatch(&TestEvent::Ping(2));
        assert_eq!(late_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reentrant_dispatch_is_permitted() {
        let dispatcher = EventDispatcher::new();
        let pongs = Arc::new(AtomicU32::new(0));

        let pongs_clone = Arc::clone(&pongs);
        let _pong_sub = dispatcher.subscribe(TestKind::Pong, move |_event| {
            pongs_clone.fetch_add(1, Ordering::SeqCst);
        });

        let dispatcher_clone = dispatcher.clone();
        let _ping_sub = dispatcher.subscribe(TestKind::Ping, move |_event| {
            dispatcher_clone.dispatch(&TestEvent::Pong);
        });

        dispatcher.dispatch(&TestEvent::Ping(1));
        assert_eq!(pongs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rebind_swaps_without_duplicating() {
        let dispatcher = EventDispatcher::new();
        let old_calls = Arc::new(AtomicU32::new(0));
        let new_calls = Arc::new(AtomicU32::new(0));

        let old_clone = Arc::clone(&old_calls);
        let sub = dispatcher.subscribe(TestKind::Ping, move |_event| {
            old_clone.fetch_add(1, Ordering::SeqCst);
        });

        let new_clone = Arc::clone(&new_calls);
        let _sub = dispatcher.rebind(Some(&sub), TestKind::Ping, move |_event| {
            new_clone.fetch_add(1, Ordering::SeqCst);
        });

        dispatcher.dispatch(&TestEvent::Ping(1));

        assert_eq!(old_calls.load(Ordering::SeqCst), 0);
        assert_eq!(new_calls.load(Ordering::SeqCst), 1);
        assert_eq!(dispatcher.handler_count(TestKind::Ping), 1);
    }
}
