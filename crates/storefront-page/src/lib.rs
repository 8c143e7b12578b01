//! # storefront-page: Page-Session Composition
//!
//! Wires the pure state in `storefront-core` into one running page
//! session: event bus, shared state, components, and the view models
//! handed to the host rendering layer.
//!
//! ## Module Organization
//! ```text
//! storefront_page/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── events.rs       ◄─── EventBus: topics, synchronous dispatch
//! ├── state/
//! │   ├── mod.rs      ◄─── Shared-state exports
//! │   ├── cart.rs     ◄─── CartState (Arc<Mutex<Cart>> wrapper)
//! │   └── reviews.rs  ◄─── ReviewsState (bus-fed review list)
//! ├── components/
//! │   ├── mod.rs      ◄─── Component exports
//! │   ├── product.rs  ◄─── ProductView (catalog + cart + reviews)
//! │   ├── review_form.rs  Review form (bus publisher)
//! │   ├── cart_display.rs Cart display (snapshot renderer)
//! │   └── tabs.rs     ◄─── Four-way tab panel
//! ├── session.rs      ◄─── PageSession (root container)
//! └── view.rs         ◄─── Serializable view models
//! ```
//!
//! ## Concurrency Model
//! Single logical thread of control: every interaction call runs to
//! completion, including any event-bus handlers it triggers, before the
//! next one starts. The `Arc<Mutex<_>>` wrappers exist for the shared
//! ownership between components and handler closures, not for
//! parallelism.
//!
//! ## Example
//! ```rust
//! use storefront_core::{Catalog, Recommend, Variant};
//! use storefront_page::PageSession;
//!
//! let catalog = Catalog::new(
//!     "Vue Mastery",
//!     "Socks",
//!     "A pair of socks",
//!     vec![],
//!     vec![Variant::new(2234, "green", "./assets/green.jpg", 10, true)],
//! );
//!
//! let mut session = PageSession::new(catalog, true);
//! session.add_to_cart();
//!
//! session.set_review_name("Alice");
//! session.set_review_text("Great socks");
//! session.set_review_rating(5);
//! session.set_review_recommend(Recommend::Yes);
//! assert!(session.submit_review());
//!
//! let page = session.view();
//! assert_eq!(page.cart.items.len(), 1);
//! assert_eq!(page.tabs.reviews.len(), 1);
//! ```

pub mod components;
pub mod events;
pub mod session;
pub mod state;
pub mod view;

pub use events::{Event, EventBus, SubscriptionId, Topic};
pub use session::PageSession;
pub use view::PageViewModel;
