//! # Cart State
//!
//! An ordered sequence of line items, each a frozen snapshot of the
//! variant that was selected at the moment it was added.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart State Operations                          │
//! │                                                                     │
//! │  Page Action               Cart Change          Owner Notified      │
//! │  ───────────               ───────────          ──────────────      │
//! │                                                                     │
//! │  Click "Add to cart" ────► items.push(item) ──► snapshot()          │
//! │                                                                     │
//! │  Click "Remove" (row i) ─► items.remove(i) ───► snapshot()          │
//! │                                                                     │
//! │  Click "Delete" ─────────► items.pop() ───────► snapshot()          │
//! │                                                                     │
//! │  NOTE: the owner re-renders dependents from the returned SNAPSHOT   │
//! │        (owned copy), never from a live reference into this cart.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Variant;

// =============================================================================
// Line Item
// =============================================================================

/// An entry in the cart referencing a variant at time of adding.
///
/// ## Design Notes
/// Fields are copied from the variant when "add to cart" fires, so the
/// row keeps displaying what the shopper actually added even if the
/// catalog were to change underneath it later (frozen-snapshot pattern).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Variant this row was snapped from.
    pub variant_id: i64,

    /// Color at time of adding (frozen).
    pub color: String,

    /// Image at time of adding (frozen).
    pub image: String,

    /// When this item was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Snapshots a variant into a cart row.
    pub fn from_variant(variant: &Variant) -> Self {
        LineItem {
            variant_id: variant.id,
            color: variant.color.clone(),
            image: variant.image.clone(),
            added_at: Utc::now(),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items keep insertion order; positional removal shifts the rest left
/// - Duplicate variants are allowed (each add is its own row)
/// - Preconditions are fatal: removal positions must be in range and
///   `remove_last` requires a non-empty cart (caller bugs, not errors)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends a snapshot of `variant` to the end of the cart.
    /// Always succeeds.
    pub fn add(&mut self, variant: &Variant) {
        self.items.push(LineItem::from_variant(variant));
    }

    /// Removes the item at `position`, shifting subsequent items left.
    ///
    /// # Panics
    /// Panics if `position >= len`. The cart display is rendered from
    /// this cart's own snapshot, so a stale position is a caller bug.
    pub fn remove_at(&mut self, position: usize) -> LineItem {
        assert!(
            position < self.items.len(),
            "cart position {} out of range (have {})",
            position,
            self.items.len()
        );
        self.items.remove(position)
    }

    /// Removes the final item.
    ///
    /// # Panics
    /// Panics if the cart is empty; the delete control is disabled on an
    /// empty cart, so reaching this with no items is a caller bug.
    pub fn remove_last(&mut self) -> LineItem {
        self.items.pop().expect("remove_last on empty cart")
    }

    /// Owned copy of the full item list for the owning container.
    ///
    /// This is the only way cart contents leave this type: dependents
    /// re-render from the value, never from an aliased live reference.
    pub fn snapshot(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    /// Number of items in the cart.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(id: i64, color: &str) -> Variant {
        Variant::new(id, color, format!("./assets/{color}.jpg"), 10, false)
    }

    #[test]
    fn test_add_snapshots_variant_fields() {
        let mut cart = Cart::new();
        cart.add(&variant(2234, "green"));

        let items = cart.snapshot();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].variant_id, 2234);
        assert_eq!(items[0].color, "green");
        assert_eq!(items[0].image, "./assets/green.jpg");
    }

    #[test]
    fn test_add_then_remove_last_round_trips() {
        let mut cart = Cart::new();
        cart.add(&variant(1, "green"));
        let before = cart.snapshot();

        cart.add(&variant(2, "blue"));
        cart.remove_last();

        assert_eq!(cart.snapshot(), before);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_at_shifts_left() {
        let mut cart = Cart::new();
        cart.add(&variant(1, "a"));
        cart.add(&variant(2, "b"));
        cart.add(&variant(3, "c"));

        let removed = cart.remove_at(1);
        assert_eq!(removed.variant_id, 2);

        let ids: Vec<i64> = cart.snapshot().iter().map(|i| i.variant_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_duplicate_adds_keep_separate_rows() {
        let mut cart = Cart::new();
        let green = variant(2234, "green");
        cart.add(&green);
        cart.add(&green);

        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_snapshot_is_detached_from_cart() {
        let mut cart = Cart::new();
        cart.add(&variant(1, "green"));

        let snapshot = cart.snapshot();
        cart.remove_last();

        // The owner's copy is unaffected by later mutation.
        assert_eq!(snapshot.len(), 1);
        assert!(cart.is_empty());
    }

    #[test]
    #[should_panic(expected = "cart position 1 out of range")]
    fn test_remove_at_out_of_range_panics() {
        let mut cart = Cart::new();
        cart.add(&variant(1, "green"));
        cart.remove_at(1);
    }

    #[test]
    #[should_panic(expected = "remove_last on empty cart")]
    fn test_remove_last_on_empty_panics() {
        Cart::new().remove_last();
    }
}
