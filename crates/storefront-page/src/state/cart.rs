//! # Cart State Wrapper
//!
//! Owns the session's [`Cart`] and funnels every access through a
//! closure, so nothing outside this wrapper can keep a live reference
//! into the item list. Dependents always work from snapshots.

use std::sync::{Arc, Mutex};

use tracing::debug;

use storefront_core::{Cart, LineItem, Variant};

/// Session-owned cart state.
///
/// ## Why Arc<Mutex<T>>?
/// - `Arc`: the owning product view and the session container both hold
///   a handle for the lifetime of the page
/// - `Mutex`: accesses are short and exclusive; every mutation ends
///   before the snapshot that notifies the container is taken
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates an empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes `f` with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Executes `f` with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }

    /// Appends a snapshot of `variant` and returns the fresh full-list
    /// snapshot for the owning container.
    pub fn add(&self, variant: &Variant) -> Vec<LineItem> {
        self.with_cart_mut(|cart| {
            cart.add(variant);
            debug!(variant_id = variant.id, len = cart.len(), "cart item added");
            cart.snapshot()
        })
    }

    /// Removes the item at `position` and returns the fresh snapshot.
    ///
    /// # Panics
    /// Panics if `position` is out of range (caller bug, see
    /// [`Cart::remove_at`]).
    pub fn remove_at(&self, position: usize) -> Vec<LineItem> {
        self.with_cart_mut(|cart| {
            let removed = cart.remove_at(position);
            debug!(
                variant_id = removed.variant_id,
                position,
                len = cart.len(),
                "cart item removed"
            );
            cart.snapshot()
        })
    }

    /// Removes the final item and returns the fresh snapshot.
    ///
    /// # Panics
    /// Panics if the cart is empty (caller bug, see [`Cart::remove_last`]).
    pub fn remove_last(&self) -> Vec<LineItem> {
        self.with_cart_mut(|cart| {
            let removed = cart.remove_last();
            debug!(
                variant_id = removed.variant_id,
                len = cart.len(),
                "last cart item removed"
            );
            cart.snapshot()
        })
    }

    /// Owned copy of the current item list.
    pub fn snapshot(&self) -> Vec<LineItem> {
        self.with_cart(Cart::snapshot)
    }

    /// Number of items in the cart.
    pub fn len(&self) -> usize {
        self.with_cart(Cart::len)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.with_cart(Cart::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(id: i64, color: &str) -> Variant {
        Variant::new(id, color, format!("./assets/{color}.jpg"), 10, false)
    }

    #[test]
    fn test_add_returns_fresh_snapshot() {
        let state = CartState::new();

        let snapshot = state.add(&variant(1, "green"));
        assert_eq!(snapshot.len(), 1);

        let snapshot = state.add(&variant(2, "blue"));
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[1].variant_id, 2);
    }

    #[test]
    fn test_clones_share_one_cart() {
        let state = CartState::new();
        let other = state.clone();

        state.add(&variant(1, "green"));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_remove_at_snapshot_reflects_shift() {
        let state = CartState::new();
        state.add(&variant(1, "a"));
        state.add(&variant(2, "b"));
        state.add(&variant(3, "c"));

        let snapshot = state.remove_at(1);
        let ids: Vec<i64> = snapshot.iter().map(|i| i.variant_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
