//! Subscription lifecycle binding
//!
//! A `SubscriptionBinding` ties one handler registration to the lifetime of
//! the component that owns it. Components that re-create their handler
//! closures on every render call [`SubscriptionBinding::bind`] each time;
//! the binding swaps the old registration for the new one atomically with
//! respect to delivery, so an event is never delivered to both generations
//! of the handler, nor to neither. Dropping the binding unsubscribes, so a
//! handler cannot outlive its owner.

use super::dispatcher::{BusEvent, EventDispatcher, Subscription};

/// At most one live registration on one dispatcher for one kind.
pub struct SubscriptionBinding<E: BusEvent> {
    dispatcher: EventDispatcher<E>,
    kind: E::Kind,
    current: Option<Subscription<E::Kind>>,
}

impl<E: BusEvent> SubscriptionBinding<E> {
    /// Create an inactive binding for `kind`. No handler is registered until
    /// the first [`bind`](Self::bind).
    pub fn new(dispatcher: &EventDispatcher<E>, kind: E::Kind) -> Self {
        Self {
            dispatcher: dispatcher.clone(),
            kind,
            current: None,
        }
    }

    /// Create a binding with `handler` already registered.
    pub fn bound(
        dispatcher: &EventDispatcher<E>,
        kind: E::Kind,
        handler: impl Fn(&E) + Send + Sync + 'static,
    ) -> Self {
        let mut binding = Self::new(dispatcher, kind);
        binding.bind(handler);
        binding
    }

    /// Install `handler`, replacing any previously bound handler.
    ///
    /// Idempotent re-registration: binding twice leaves exactly one live
    /// registration, and the swap happens under the dispatcher's registry
    /// lock so no in-between state is observable.
    pub fn bind(&mut self, handler: impl Fn(&E) + Send + Sync + 'static) {
        let subscription = self
            .dispatcher
            .rebind(self.current.as_ref(), self.kind, handler);
        self.current = Some(subscription);
    }

    /// Remove the registration, if any. Safe to call repeatedly.
    pub fn release(&mut self) {
        if let Some(subscription) = self.current.take() {
            self.dispatcher.unsubscribe(&subscription);
        }
    }

    /// Whether a handler is currently registered.
    pub fn is_bound(&self) -> bool {
        self.current.is_some()
    }

    pub fn kind(&self) -> E::Kind {
        self.kind
    }
}

impl<E: BusEvent> Drop for SubscriptionBinding<E> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Tick;

    struct TickEvent;

    impl BusEvent for TickEvent {
        type Kind = Tick;

        fn kind(&self) -> Tick {
            Tick
        }
    }

    #[test]
    fn rebinding_supersedes_instead_of_duplicating() {
        let dispatcher = EventDispatcher::new();
        let calls = Arc::new(AtomicU32::new(0));

        let mut binding = SubscriptionBinding::new(&dispatcher, Tick);
        for _render in 0..3 {
            let calls = Arc::clone(&calls);
            binding.bind(move |_event: &TickEvent| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }

        dispatcher.dispatch(&TickEvent);

        // Three binds, one delivery.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(dispatcher.handler_count(Tick), 1);
    }

    #[test]
    fn drop_releases_the_registration() {
        let dispatcher = EventDispatcher::new();
        let calls = Arc::new(AtomicU32::new(0));

        {
            let calls = Arc::clone(&calls);
            let _binding = SubscriptionBinding::bound(&dispatcher, Tick, move |_event| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
            dispatcher.dispatch(&TickEvent);
        }

        dispatcher.dispatch(&TickEvent);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(dispatcher.handler_count(Tick), 0);
    }

    #[test]
    fn release_is_idempotent() {
        let dispatcher = EventDispatcher::new();
        let mut binding = SubscriptionBinding::bound(&dispatcher, Tick, |_event: &TickEvent| {});

        binding.release();
        binding.release();

        assert!(!binding.is_bound());
        assert_eq!(dispatcher.handler_count(Tick), 0);
    }
}
