//! # storefront-core: Pure Page State for the Storefront Demo
//!
//! This crate is the **heart** of the storefront page. It contains every
//! piece of page state as plain data with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 Host Rendering Layer                        │   │
//! │  │   Product view ──► Cart display ──► Review tabs             │   │
//! │  └──────────────────────────┬──────────────────────────────────┘   │
//! │                             │ view models / interaction calls      │
//! │  ┌──────────────────────────▼──────────────────────────────────┐   │
//! │  │              storefront-page (session wiring)               │   │
//! │  │    event bus, shared state wrappers, view models            │   │
//! │  └──────────────────────────┬──────────────────────────────────┘   │
//! │                             │                                      │
//! │  ┌──────────────────────────▼──────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                │   │
//! │  │                                                             │   │
//! │  │   ┌─────────┐  ┌────────┐  ┌──────────┐  ┌──────────┐      │   │
//! │  │   │ catalog │  │  cart  │  │  review  │  │   tabs   │      │   │
//! │  │   │ Variant │  │  Cart  │  │  Draft   │  │   Tab    │      │   │
//! │  │   │ Catalog │  │LineItem│  │  Review  │  │ TabStrip │      │   │
//! │  │   └─────────┘  └────────┘  └──────────┘  └──────────┘      │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO RENDERING • NO GLOBALS • PURE STATE           │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Product catalog state (variants, selection, derived display values)
//! - [`cart`] - Cart state (line-item snapshots, positional removal)
//! - [`review`] - Review records and the review-form draft
//! - [`validation`] - Field-presence validation for the review form
//! - [`tabs`] - The four-way tab selector
//! - [`error`] - Typed validation errors
//!
//! ## Design Principles
//!
//! 1. **Recompute-on-read**: derived display values are never cached
//! 2. **Snapshots, not aliases**: cart mutations hand back owned copies
//! 3. **Typed errors**: validation failures are enum variants, never strings
//! 4. **Fatal preconditions**: an out-of-range index or a removal from an
//!    empty cart is a caller bug and panics, it is not a recoverable error
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::catalog::{Catalog, Variant};
//!
//! let catalog = Catalog::new(
//!     "Vue Mastery",
//!     "Socks",
//!     "A pair of socks",
//!     vec!["80% cotton".into()],
//!     vec![Variant::new(2234, "green", "./assets/green.jpg", 10, true)],
//! );
//!
//! assert_eq!(catalog.title(), "Vue Mastery Socks");
//! assert!(catalog.in_stock());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod review;
pub mod tabs;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Cart` instead of
// `use storefront_core::cart::Cart`

pub use cart::{Cart, LineItem};
pub use catalog::{Catalog, Shipping, Variant};
pub use error::ValidationError;
pub use review::{Recommend, Review, ReviewDraft};
pub use tabs::{Tab, TabStrip};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Placeholder shown when a variant has no image of its own.
pub const FALLBACK_IMAGE: &str = "./assets/default-image.jpg";

/// Flat shipping charge in cents for non-premium customers.
///
/// Premium members always ship free; everyone else pays this fixed
/// amount regardless of cart contents.
pub const FLAT_SHIPPING_CENTS: i64 = 299;

/// Lowest rating the review form accepts.
pub const MIN_RATING: u8 = 1;

/// Highest rating the review form accepts.
pub const MAX_RATING: u8 = 5;
