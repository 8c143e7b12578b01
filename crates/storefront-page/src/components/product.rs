//! # Product View
//!
//! The product pane. Owns the catalog, the cart, and the review list;
//! subscribes to the review-submitted topic while active.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        ProductView                                  │
//! │                                                                     │
//! │  swatch mouse-over ──► select_variant(i) ──► derived values move    │
//! │                                                                     │
//! │  "Add to cart" ──► cart.add(selected) ───┐                          │
//! │  "Delete" ───────► cart.remove_last() ───┼──► snapshot returned     │
//! │  row "Remove" ───► cart.remove_at(i) ────┘    to the container      │
//! │                                                                     │
//! │  bus: ReviewSubmitted ──► reviews.push(review)   (while active)     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use storefront_core::{Catalog, LineItem, Review};

use crate::events::{Event, EventBus, SubscriptionId, Topic};
use crate::state::{CartState, ReviewsState};

/// The product pane and owner of cart and review state.
///
/// ## Subscription Lifecycle
/// The review-submitted handler is registered by [`activate`] and
/// removed by [`deactivate`] (or on drop): a handler must never outlive
/// the component whose state it mutates.
///
/// [`activate`]: ProductView::activate
/// [`deactivate`]: ProductView::deactivate
#[derive(Debug)]
pub struct ProductView {
    catalog: Catalog,
    cart: CartState,
    reviews: ReviewsState,
    bus: EventBus,
    subscription: Option<SubscriptionId>,
}

impl ProductView {
    /// Creates an inactive product view over `catalog`, publishing and
    /// subscribing on the injected `bus`.
    pub fn new(catalog: Catalog, bus: EventBus) -> Self {
        ProductView {
            catalog,
            cart: CartState::new(),
            reviews: ReviewsState::new(),
            bus,
            subscription: None,
        }
    }

    /// Mounts the component: registers the review-submitted handler.
    /// Idempotent; a second call keeps the existing subscription.
    pub fn activate(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        let reviews = self.reviews.clone();
        let id = self.bus.subscribe(Topic::ReviewSubmitted, move |event| {
            let Event::ReviewSubmitted(review) = event;
            reviews.push(review.clone());
        });
        self.subscription = Some(id);
        info!("product view activated");
    }

    /// Unmounts the component: removes the review-submitted handler so
    /// no event can reach state that is no longer rendered.
    pub fn deactivate(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.bus.unsubscribe(id);
            info!("product view deactivated");
        }
    }

    // -------------------------------------------------------------------------
    // Catalog operations
    // -------------------------------------------------------------------------

    /// Moves the variant selection.
    ///
    /// # Panics
    /// Panics if `index` is out of range (see [`Catalog::select_variant`]).
    pub fn select_variant(&mut self, index: usize) {
        self.catalog.select_variant(index);
    }

    /// Read access to the catalog for view building.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // -------------------------------------------------------------------------
    // Cart operations — every mutation returns the fresh snapshot the
    // owning container re-renders dependents from
    // -------------------------------------------------------------------------

    /// Adds the currently selected variant to the cart.
    pub fn add_to_cart(&mut self) -> Vec<LineItem> {
        self.cart.add(self.catalog.selected_variant())
    }

    /// Removes the last-added cart item.
    ///
    /// # Panics
    /// Panics if the cart is empty; the delete control is disabled then.
    pub fn remove_last(&mut self) -> Vec<LineItem> {
        self.cart.remove_last()
    }

    /// Removes the cart item at `position`.
    ///
    /// # Panics
    /// Panics if `position` is past the end of the cart.
    pub fn remove_item_at(&mut self, position: usize) -> Vec<LineItem> {
        self.cart.remove_at(position)
    }

    /// Number of items currently in the cart.
    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }

    // -------------------------------------------------------------------------
    // Review list
    // -------------------------------------------------------------------------

    /// Owned copy of the submitted reviews, in submission order.
    pub fn reviews(&self) -> Vec<Review> {
        self.reviews.snapshot()
    }
}

impl Drop for ProductView {
    fn drop(&mut self) {
        // Releases the subscription even when deactivate was never
        // called explicitly.
        self.deactivate();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use storefront_core::{Recommend, Variant};

    fn socks() -> Catalog {
        Catalog::new(
            "Vue Mastery",
            "Socks",
            "A pair of socks",
            vec![],
            vec![
                Variant::new(2234, "green", "./assets/green.jpg", 10, true),
                Variant::new(2235, "blue", "./assets/blue.jpg", 10, false),
            ],
        )
    }

    fn review(name: &str) -> Review {
        Review {
            name: name.to_string(),
            text: "Great socks".to_string(),
            rating: 5,
            recommend: Recommend::Yes,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_to_cart_snapshots_selected_variant() {
        let mut view = ProductView::new(socks(), EventBus::new());

        view.select_variant(1);
        let snapshot = view.add_to_cart();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].variant_id, 2235);
        assert_eq!(snapshot[0].color, "blue");
    }

    #[test]
    fn test_active_view_collects_published_reviews() {
        let bus = EventBus::new();
        let mut view = ProductView::new(socks(), bus.clone());
        view.activate();

        bus.publish(Event::ReviewSubmitted(review("Alice")));

        let reviews = view.reviews();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].name, "Alice");
    }

    #[test]
    fn test_deactivated_view_ignores_events() {
        let bus = EventBus::new();
        let mut view = ProductView::new(socks(), bus.clone());
        view.activate();
        view.deactivate();

        bus.publish(Event::ReviewSubmitted(review("Alice")));
        assert!(view.reviews().is_empty());
    }

    #[test]
    fn test_activate_is_idempotent() {
        let bus = EventBus::new();
        let mut view = ProductView::new(socks(), bus.clone());
        view.activate();
        view.activate();

        bus.publish(Event::ReviewSubmitted(review("Alice")));
        assert_eq!(view.reviews().len(), 1);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let bus = EventBus::new();
        {
            let mut view = ProductView::new(socks(), bus.clone());
            view.activate();
            assert_eq!(bus.subscriber_count(Topic::ReviewSubmitted), 1);
        }
        assert_eq!(bus.subscriber_count(Topic::ReviewSubmitted), 0);
    }
}
