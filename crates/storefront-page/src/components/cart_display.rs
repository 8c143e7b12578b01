//! # Cart Display
//!
//! Renders the cart from the latest snapshot the container pushed down.
//! This component never mutates the owner's list: a remove click only
//! reports a position back up through the session, and the owner's next
//! notification replaces the snapshot wholesale.

use storefront_core::LineItem;

use crate::view::CartViewModel;

/// The cart display under the product pane.
#[derive(Debug, Default)]
pub struct CartDisplay {
    items: Vec<LineItem>,
}

impl CartDisplay {
    /// Creates an empty display.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cart-changed notification from the container: replaces the
    /// rendered snapshot with the new value.
    pub fn set_items(&mut self, items: Vec<LineItem>) {
        self.items = items;
    }

    /// The snapshot currently rendered.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Builds the cart view model.
    pub fn view(&self) -> CartViewModel {
        CartViewModel::build(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Variant;

    #[test]
    fn test_snapshot_replacement() {
        let mut display = CartDisplay::new();
        assert_eq!(display.view().empty_message.as_deref(), Some("Your cart is empty."));

        let green = Variant::new(2234, "green", "./assets/green.jpg", 10, false);
        display.set_items(vec![LineItem::from_variant(&green)]);

        let view = display.view();
        assert!(view.empty_message.is_none());
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].position, 0);
        assert_eq!(view.items[0].color, "green");
    }
}
