//! # Components
//!
//! The page's interactive components, one module each:
//!
//! - [`product`] - product pane: variant selection, cart ownership,
//!   review-list subscription
//! - [`review_form`] - the make-a-review form (bus publisher)
//! - [`cart_display`] - cart rendering from container snapshots
//! - [`tabs`] - the four-way tab panel
//!
//! Components never reach into each other: everything cross-component
//! travels either through the event bus or through the session
//! container's snapshot notifications.

pub mod cart_display;
pub mod product;
pub mod review_form;
pub mod tabs;

pub use cart_display::CartDisplay;
pub use product::ProductView;
pub use review_form::ReviewForm;
pub use tabs::ProductTabs;
