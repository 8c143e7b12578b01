//! # Event Channel
//!
//! Publish/subscribe bus with named topics, scoped to one page session.
//!
//! ## Dispatch Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        EventBus Dispatch                            │
//! │                                                                     │
//! │  publish(event)                                                     │
//! │       │                                                             │
//! │       ├── snapshot handlers registered for event.topic()            │
//! │       │   (lock released before any handler runs)                   │
//! │       │                                                             │
//! │       └── invoke each snapshot handler, synchronously, in           │
//! │           subscription order, exactly once                          │
//! │                                                                     │
//! │  Guarantees:                                                        │
//! │  • exactly the handlers subscribed at the moment of publish run     │
//! │  • no subscribers → no-op (returns 0), never an error               │
//! │  • handlers may publish or (un)subscribe re-entrantly; the          │
//! │    in-flight sweep is unaffected                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is deliberately no process-global bus: the session constructs
//! one and hands clones to exactly the components that need it (the
//! review form publishes, the product view subscribes).

use std::sync::{Arc, Mutex};

use tracing::debug;

use storefront_core::Review;

// =============================================================================
// Topics & Events
// =============================================================================

/// Named channels that decouple publishers from subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    /// A review passed form validation and was submitted.
    ReviewSubmitted,
}

/// Events that flow through the bus, one payload shape per topic.
#[derive(Debug, Clone)]
pub enum Event {
    ReviewSubmitted(Review),
}

impl Event {
    /// The topic this event is delivered on.
    pub fn topic(&self) -> Topic {
        match self {
            Event::ReviewSubmitted(_) => Topic::ReviewSubmitted,
        }
    }
}

// =============================================================================
// Subscriptions
// =============================================================================

/// Handle returned by [`EventBus::subscribe`]; pass it back to
/// [`EventBus::unsubscribe`] when the component deactivates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Handlers are shared so a publish sweep can run against a snapshot
/// of the registry without holding the lock.
type Handler = Arc<dyn Fn(&Event) + Send + Sync>;

struct Subscription {
    id: u64,
    topic: Topic,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

// =============================================================================
// Event Bus
// =============================================================================

/// A cheaply clonable publish/subscribe bus.
///
/// All clones share one registry; the bus lives exactly as long as the
/// page session that created it.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<Registry>>,
}

impl EventBus {
    /// Creates a bus with no subscriptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `handler` to `topic` for as long as the returned
    /// handle stays registered. Handlers fire in subscription order.
    pub fn subscribe<F>(&self, topic: Topic, handler: F) -> SubscriptionId
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        let mut registry = self.inner.lock().expect("event bus mutex poisoned");
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscriptions.push(Subscription {
            id,
            topic,
            handler: Arc::new(handler),
        });

        debug!(?topic, id, "subscribed handler");
        SubscriptionId(id)
    }

    /// Removes the subscription behind `handle`.
    ///
    /// Returns `false` when the handle was already unsubscribed, which
    /// is harmless (deactivation paths may race a manual unsubscribe).
    pub fn unsubscribe(&self, handle: SubscriptionId) -> bool {
        let mut registry = self.inner.lock().expect("event bus mutex poisoned");
        let before = registry.subscriptions.len();
        registry.subscriptions.retain(|s| s.id != handle.0);
        let removed = registry.subscriptions.len() < before;

        debug!(id = handle.0, removed, "unsubscribed handler");
        removed
    }

    /// Publishes `event` to every handler currently subscribed to its
    /// topic, synchronously and in subscription order.
    ///
    /// Returns the number of handlers invoked; zero subscribers is a
    /// no-op, not an error.
    pub fn publish(&self, event: Event) -> usize {
        // Snapshot first so handlers run without the registry lock:
        // a handler may publish again or change subscriptions in the
        // same turn.
        let handlers: Vec<Handler> = {
            let registry = self.inner.lock().expect("event bus mutex poisoned");
            registry
                .subscriptions
                .iter()
                .filter(|s| s.topic == event.topic())
                .map(|s| Arc::clone(&s.handler))
                .collect()
        };

        debug!(topic = ?event.topic(), handlers = handlers.len(), "publishing event");

        for handler in &handlers {
            handler(&event);
        }
        handlers.len()
    }

    /// Number of live subscriptions on `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        let registry = self.inner.lock().expect("event bus mutex poisoned");
        registry
            .subscriptions
            .iter()
            .filter(|s| s.topic == topic)
            .count()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.inner.lock().expect("event bus mutex poisoned");
        f.debug_struct("EventBus")
            .field("subscriptions", &registry.subscriptions.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
