//! # Page Session
//!
//! The root container. Owns every component, the event bus, and the
//! user-interaction surface the rendering layer calls into.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         PageSession                                 │
//! │                                                                     │
//! │  Cart path (owner-mutates / notify-parent):                         │
//! │                                                                     │
//! │    add_to_cart() ──► ProductView mutates its cart                   │
//! │                         │                                           │
//! │                         └──► snapshot ──► CartDisplay.set_items     │
//! │                                                                     │
//! │  Review path (event channel):                                       │
//! │                                                                     │
//! │    submit_review() ──► ReviewForm validates                         │
//! │                         │ ok                                        │
//! │                         └──► bus.publish(ReviewSubmitted)           │
//! │                               │                                     │
//! │                               └──► ProductView subscription         │
//! │                                     appends to its review list      │
//! │                                     (Reviews tab renders it)        │
//! │                                                                     │
//! │  All of it synchronous: every call runs to completion before the    │
//! │  next user event is processed.                                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use storefront_core::{Catalog, LineItem, Recommend, Shipping, Tab};

use crate::components::{CartDisplay, ProductTabs, ProductView, ReviewForm};
use crate::events::EventBus;
use crate::view::{PageViewModel, ProductViewModel};

/// One page session: all state lives here and dies on reload.
#[derive(Debug)]
pub struct PageSession {
    premium: bool,
    bus: EventBus,
    product: ProductView,
    review_form: ReviewForm,
    cart_display: CartDisplay,
    tabs: ProductTabs,
}

impl PageSession {
    /// Starts a session over `catalog` for a customer whose membership
    /// decides the shipping cost.
    ///
    /// The bus is created here and injected into exactly the two
    /// components that use it; its lifetime is this session.
    pub fn new(catalog: Catalog, premium: bool) -> Self {
        let bus = EventBus::new();

        let mut product = ProductView::new(catalog, bus.clone());
        product.activate();

        let session = PageSession {
            premium,
            review_form: ReviewForm::new(bus.clone()),
            bus,
            product,
            cart_display: CartDisplay::new(),
            tabs: ProductTabs::new(),
        };

        info!(premium, "page session started");
        session
    }

    /// The session's event bus (handed out for additional wiring in
    /// tests and tooling; components already hold their own clones).
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Shipping cost for this customer, derived on every read.
    pub fn shipping(&self) -> Shipping {
        Shipping::for_member(self.premium)
    }

    // -------------------------------------------------------------------------
    // Product interactions
    // -------------------------------------------------------------------------

    /// Swatch mouse-over: select the variant at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range (caller bug).
    pub fn select_variant(&mut self, index: usize) {
        self.product.select_variant(index);
    }

    /// "Add to cart" click.
    pub fn add_to_cart(&mut self) {
        let snapshot = self.product.add_to_cart();
        self.update_cart(snapshot);
    }

    /// "Delete" click: drop the last-added item.
    ///
    /// # Panics
    /// Panics if the cart is empty; the control is disabled then.
    pub fn remove_last_from_cart(&mut self) {
        let snapshot = self.product.remove_last();
        self.update_cart(snapshot);
    }

    /// Cart-row "Remove" click.
    ///
    /// # Panics
    /// Panics if `position` is past the end of the cart.
    pub fn remove_cart_item(&mut self, position: usize) {
        let snapshot = self.product.remove_item_at(position);
        self.update_cart(snapshot);
    }

    /// Cart-changed notification: the owner handed us a value snapshot,
    /// the display re-renders from it. No aliasing of the live list.
    fn update_cart(&mut self, snapshot: Vec<LineItem>) {
        self.cart_display.set_items(snapshot);
    }

    // -------------------------------------------------------------------------
    // Tab + review-form interactions
    // -------------------------------------------------------------------------

    /// Tab click.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tabs.select_tab(tab);
    }

    /// The currently active tab.
    pub fn active_tab(&self) -> Tab {
        self.tabs.active_tab()
    }

    /// Review-form name input.
    pub fn set_review_name(&mut self, name: impl Into<String>) {
        self.review_form.set_name(name);
    }

    /// Review-form body input.
    pub fn set_review_text(&mut self, text: impl Into<String>) {
        self.review_form.set_text(text);
    }

    /// Review-form rating pick.
    pub fn set_review_rating(&mut self, rating: u8) {
        self.review_form.set_rating(rating);
    }

    /// Review-form recommendation pick.
    pub fn set_review_recommend(&mut self, recommend: Recommend) {
        self.review_form.set_recommend(recommend);
    }

    /// Review-form submit. Returns whether a review was published.
    pub fn submit_review(&mut self) -> bool {
        self.review_form.submit()
    }

    // -------------------------------------------------------------------------
    // Render boundary
    // -------------------------------------------------------------------------

    /// Builds the whole page tree for the rendering layer. Recomputed
    /// from state on every call, never cached.
    pub fn view(&self) -> PageViewModel {
        let shipping = self.shipping();
        let catalog = self.product.catalog();
        let reviews = self.product.reviews();

        PageViewModel {
            product: ProductViewModel::build(catalog, shipping, self.product.cart_len()),
            cart: self.cart_display.view(),
            review_form: self.review_form.view(),
            tabs: self.tabs.view(&reviews, shipping, &catalog.details),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
