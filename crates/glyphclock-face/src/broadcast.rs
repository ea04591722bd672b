//! Tick broadcaster - subscription registry for clock events
//!
//! Stands in for the host broadcast mechanism: an observer registers a
//! handler plus a kind filter and gets back an RAII guard whose drop is
//! the unsubscribe path. Delivery runs under a single lock, so handlers
//! are serialized and never observe each other mid-mutation.

use std::sync::{Arc, Weak};

use glyphclock_core::{ClockEvent, ClockEventKind};
use parking_lot::Mutex;

/// Subscription filter over event kinds, the analogue of registering an
/// intent filter for a specific set of actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventFilter {
    kinds: Vec<ClockEventKind>,
}

impl EventFilter {
    /// Filter matching all three clock event kinds.
    pub fn all() -> Self {
        EventFilter {
            kinds: ClockEventKind::ALL.to_vec(),
        }
    }

    /// Filter matching only the given kinds.
    pub fn only(kinds: &[ClockEventKind]) -> Self {
        EventFilter {
            kinds: kinds.to_vec(),
        }
    }

    #[inline]
    pub fn matches(&self, kind: ClockEventKind) -> bool {
        self.kinds.contains(&kind)
    }
}

type Handler = Box<dyn FnMut(&ClockEvent) + Send>;

struct Subscriber {
    id: u64,
    filter: EventFilter,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

/// Broadcast source for clock events.
///
/// Cloning shares the registry, so one host side can emit while any
/// number of observers hold their own handle for subscribing.
#[derive(Clone, Default)]
pub struct TickBroadcaster {
    registry: Arc<Mutex<Registry>>,
}

impl TickBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for events matching `filter`.
    ///
    /// The returned guard unsubscribes on drop; there is no other way to
    /// unsubscribe, which is what makes teardown impossible to forget.
    pub fn subscribe(
        &self,
        filter: EventFilter,
        handler: impl FnMut(&ClockEvent) + Send + 'static,
    ) -> Subscription {
        let mut registry = self.registry.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.push(Subscriber {
            id,
            filter,
            handler: Box::new(handler),
        });
        tracing::debug!(id, "subscriber registered");
        Subscription {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Deliver an event to every matching subscriber, in registration
    /// order. Returns the number of handlers invoked.
    ///
    /// Handlers run while the registry is locked; a handler must not
    /// subscribe or emit on the same broadcaster.
    pub fn emit(&self, event: &ClockEvent) -> usize {
        let mut registry = self.registry.lock();
        let kind = event.kind();
        let mut delivered = 0;
        for subscriber in registry.subscribers.iter_mut() {
            if subscriber.filter.matches(kind) {
                (subscriber.handler)(event);
                delivered += 1;
            }
        }
        tracing::trace!(?kind, delivered, "clock event delivered");
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.lock().subscribers.len()
    }
}

/// RAII unsubscribe guard.
///
/// Dropping the guard removes the handler from the registry, so an
/// observer that goes away on any exit path stops receiving events.
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock();
            registry.subscribers.retain(|s| s.id != self.id);
            tracing::debug!(id = self.id, "subscriber removed");
        }
    }
}
