//! # View Models
//!
//! Serializable DTOs for the host rendering layer.
//!
//! ## The Render Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Render Boundary                                │
//! │                                                                     │
//! │  Rust session state            Host rendering layer                 │
//! │  ──────────────────            ────────────────────                 │
//! │                                                                     │
//! │  Catalog/Cart/Reviews ──view──► JSON view models ──► DOM/widgets    │
//! │                                                                     │
//! │  ◄──────────────────── discrete interaction calls ────────────────  │
//! │        (select_variant, add_to_cart, submit_review, ...)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every view model is rebuilt from state on each read; none of these
//! values are cached anywhere. `ts-rs` exports keep the rendering layer
//! in lockstep with these shapes.

use serde::Serialize;
use ts_rs::TS;

use storefront_core::{Catalog, LineItem, Review, Shipping, Tab};

// =============================================================================
// Product View Model
// =============================================================================

/// One color swatch under the product image.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SwatchViewModel {
    pub variant_id: i64,
    pub color: String,
    /// Whether this swatch is the active selection (highlight it).
    pub active: bool,
}

/// Everything the product pane renders.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductViewModel {
    pub title: String,
    pub image: String,
    pub alt_text: String,
    pub in_stock: bool,
    pub sale_message: String,
    /// Label next to "Shipping:" ("Free" or a dollar amount).
    pub shipping: String,
    pub details: Vec<String>,
    pub swatches: Vec<SwatchViewModel>,
    /// Number of items currently in the cart (badge next to the button).
    pub cart_count: usize,
    /// Disable the add-to-cart button when the selection is out of stock.
    pub add_disabled: bool,
    /// Disable the delete button when the cart is empty.
    pub delete_disabled: bool,
}

impl ProductViewModel {
    /// Builds the product pane from catalog state.
    pub fn build(catalog: &Catalog, shipping: Shipping, cart_count: usize) -> Self {
        let selected = catalog.selected_index();
        ProductViewModel {
            title: catalog.title(),
            image: catalog.image().to_string(),
            alt_text: catalog.alt_text.clone(),
            in_stock: catalog.in_stock(),
            sale_message: catalog.sale_message(),
            shipping: shipping.label(),
            details: catalog.details.clone(),
            swatches: catalog
                .variants()
                .iter()
                .enumerate()
                .map(|(index, variant)| SwatchViewModel {
                    variant_id: variant.id,
                    color: variant.color.clone(),
                    active: index == selected,
                })
                .collect(),
            cart_count,
            add_disabled: !catalog.in_stock(),
            delete_disabled: cart_count == 0,
        }
    }
}

// =============================================================================
// Cart View Model
// =============================================================================

/// One row of the cart display. `position` is what the remove control
/// sends back to the session.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartRowViewModel {
    pub position: usize,
    pub variant_id: i64,
    pub color: String,
    pub image: String,
}

/// The cart display, built from the latest snapshot the container
/// received (never from the live cart).
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartViewModel {
    pub items: Vec<CartRowViewModel>,
    /// Shown instead of the list when there are no items.
    pub empty_message: Option<String>,
}

impl CartViewModel {
    /// Text shown when the cart has no items.
    pub const EMPTY_MESSAGE: &'static str = "Your cart is empty.";

    /// Builds the cart display from a line-item snapshot.
    pub fn build(items: &[LineItem]) -> Self {
        CartViewModel {
            items: items
                .iter()
                .enumerate()
                .map(|(position, item)| CartRowViewModel {
                    position,
                    variant_id: item.variant_id,
                    color: item.color.clone(),
                    image: item.image.clone(),
                })
                .collect(),
            empty_message: items
                .is_empty()
                .then(|| Self::EMPTY_MESSAGE.to_string()),
        }
    }
}

// =============================================================================
// Review Form View Model
// =============================================================================

/// Field echoes plus the error lines from the last submit attempt.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReviewFormViewModel {
    pub name: String,
    pub text: String,
    pub rating: Option<u8>,
    /// Selected radio label ("Yes"/"No"), if any.
    pub recommend: Option<String>,
    /// One line per missing field, in fixed field order.
    pub errors: Vec<String>,
}

// =============================================================================
// Tabs View Model
// =============================================================================

/// One entry on the tab strip.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TabButtonViewModel {
    pub label: String,
    pub active: bool,
}

/// One rendered review row on the Reviews tab.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReviewRowViewModel {
    pub name: String,
    pub rating: u8,
    pub text: String,
    pub recommend: String,
}

impl ReviewRowViewModel {
    fn from_review(review: &Review) -> Self {
        ReviewRowViewModel {
            name: review.name.clone(),
            rating: review.rating,
            text: review.text.clone(),
            recommend: review.recommend.label().to_string(),
        }
    }
}

/// The tab strip plus the content of every pane; the rendering layer
/// shows only the active one.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TabsViewModel {
    pub tabs: Vec<TabButtonViewModel>,
    pub active: String,
    pub reviews: Vec<ReviewRowViewModel>,
    /// Shown on the Reviews pane when no reviews exist yet.
    pub no_reviews_message: Option<String>,
    pub shipping: String,
    pub details: Vec<String>,
}

impl TabsViewModel {
    /// Text shown on the Reviews pane before the first submission.
    pub const NO_REVIEWS_MESSAGE: &'static str = "There are no reviews yet.";

    /// Builds the tab panel.
    pub fn build(active: Tab, reviews: &[Review], shipping: Shipping, details: &[String]) -> Self {
        TabsViewModel {
            tabs: Tab::ALL
                .iter()
                .map(|tab| TabButtonViewModel {
                    label: tab.label().to_string(),
                    active: *tab == active,
                })
                .collect(),
            active: active.label().to_string(),
            reviews: reviews.iter().map(ReviewRowViewModel::from_review).collect(),
            no_reviews_message: reviews
                .is_empty()
                .then(|| Self::NO_REVIEWS_MESSAGE.to_string()),
            shipping: shipping.label(),
            details: details.to_vec(),
        }
    }
}

// =============================================================================
// Page View Model
// =============================================================================

/// The whole page in one tree, as handed to the rendering layer.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PageViewModel {
    pub product: ProductViewModel,
    pub cart: CartViewModel,
    pub review_form: ReviewFormViewModel,
    pub tabs: TabsViewModel,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Variant;

    fn catalog() -> Catalog {
        Catalog::new(
            "Vue Mastery",
            "Socks",
            "A pair of socks",
            vec!["80% cotton".to_string()],
            vec![
                Variant::new(2234, "green", "./assets/green.jpg", 10, true),
                Variant::new(2235, "blue", "./assets/blue.jpg", 0, false),
            ],
        )
    }

    #[test]
    fn test_product_view_marks_active_swatch() {
        let mut catalog = catalog();
        catalog.select_variant(1);

        let view = ProductViewModel::build(&catalog, Shipping::Free, 0);
        assert!(!view.swatches[0].active);
        assert!(view.swatches[1].active);
        assert!(view.add_disabled); // blue is out of stock
        assert_eq!(view.cart_count, 0);
        assert!(view.delete_disabled);
    }

    #[test]
    fn test_cart_view_empty_message() {
        let view = CartViewModel::build(&[]);
        assert!(view.items.is_empty());
        assert_eq!(view.empty_message.as_deref(), Some("Your cart is empty."));
    }

    #[test]
    fn test_tabs_view_no_reviews_message() {
        let view = TabsViewModel::build(Tab::Reviews, &[], Shipping::Free, &[]);
        assert_eq!(
            view.no_reviews_message.as_deref(),
            Some("There are no reviews yet.")
        );
        assert!(view.tabs[0].active);
        assert_eq!(view.active, "Reviews");
    }
}
