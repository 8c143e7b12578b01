//! # Product Catalog State
//!
//! The set of purchasable variants for a single product, the current
//! selection, and the display values derived from it.
//!
//! ## Recompute-on-Read
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Derived Display Values                          │
//! │                                                                     │
//! │   selected: usize ────┬──► title()         "{brand} {product}"     │
//! │                       ├──► image()         variant image/fallback  │
//! │                       ├──► in_stock()      quantity > 0            │
//! │                       └──► sale_message()  fixed phrase per flag   │
//! │                                                                     │
//! │   Nothing here is cached. Every read walks back to the selected     │
//! │   variant, so a selection change can never leave a stale value.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{FALLBACK_IMAGE, FLAT_SHIPPING_CENTS};

// =============================================================================
// Variant
// =============================================================================

/// One purchasable configuration of the product.
///
/// Immutable after initial load: nothing in this crate mutates a variant
/// once the catalog holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variant {
    /// Business identifier for the variant.
    pub id: i64,

    /// Color name shown on the swatch and in the cart.
    pub color: String,

    /// Image path for this variant. May be empty; display falls back
    /// to [`FALLBACK_IMAGE`].
    pub image: String,

    /// Units on hand. Zero means out of stock.
    pub quantity: i64,

    /// Whether the sale banner applies to this variant.
    #[serde(default)]
    pub on_sale: bool,
}

impl Variant {
    /// Creates a variant from its loaded fields.
    pub fn new(
        id: i64,
        color: impl Into<String>,
        image: impl Into<String>,
        quantity: i64,
        on_sale: bool,
    ) -> Self {
        Variant {
            id,
            color: color.into(),
            image: image.into(),
            quantity,
            on_sale,
        }
    }

    /// Checks whether this variant can currently be added to the cart.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// Shipping cost for the current customer.
///
/// Premium members ship free; everyone else pays the flat charge.
/// Derived from the membership flag on every read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Shipping {
    /// No charge (premium membership perk).
    Free,
    /// Flat charge in cents.
    Flat { cents: i64 },
}

impl Shipping {
    /// Resolves the shipping cost for a customer.
    pub fn for_member(premium: bool) -> Self {
        if premium {
            Shipping::Free
        } else {
            Shipping::Flat {
                cents: FLAT_SHIPPING_CENTS,
            }
        }
    }

    /// Label shown next to "Shipping:" on the page.
    pub fn label(&self) -> String {
        match self {
            Shipping::Free => "Free".to_string(),
            Shipping::Flat { cents } => format!("${}.{:02}", cents / 100, cents % 100),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The product on display and its selectable variants.
///
/// ## Invariants
/// - `variants` is non-empty
/// - `0 <= selected < variants.len()`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalog {
    /// Brand shown before the product name in the title.
    pub brand: String,

    /// Product name.
    pub product_name: String,

    /// Alt text for the product image.
    pub alt_text: String,

    /// Free-form detail lines ("80% cotton", ...).
    pub details: Vec<String>,

    /// Purchasable variants. Immutable after load.
    variants: Vec<Variant>,

    /// Index of the currently selected variant.
    selected: usize,
}

impl Catalog {
    /// Creates a catalog with the first variant selected.
    ///
    /// # Panics
    /// Panics if `variants` is empty: a product page without a single
    /// variant has nothing to display and nothing to sell.
    pub fn new(
        brand: impl Into<String>,
        product_name: impl Into<String>,
        alt_text: impl Into<String>,
        details: Vec<String>,
        variants: Vec<Variant>,
    ) -> Self {
        assert!(!variants.is_empty(), "catalog requires at least one variant");
        Catalog {
            brand: brand.into(),
            product_name: product_name.into(),
            alt_text: alt_text.into(),
            details,
            variants,
            selected: 0,
        }
    }

    /// Selects the variant at `index`.
    ///
    /// Has no side effect beyond moving the selection; every dependent
    /// display value recomputes from it on the next read.
    ///
    /// # Panics
    /// Panics if `index >= variants.len()`. An out-of-range index is a
    /// caller bug (the swatch list is built from this very catalog), not
    /// a recoverable condition.
    pub fn select_variant(&mut self, index: usize) {
        assert!(
            index < self.variants.len(),
            "variant index {} out of range (have {})",
            index,
            self.variants.len()
        );
        self.selected = index;
    }

    /// Index of the currently selected variant.
    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The currently selected variant.
    #[inline]
    pub fn selected_variant(&self) -> &Variant {
        &self.variants[self.selected]
    }

    /// All variants, in swatch order.
    #[inline]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    // -------------------------------------------------------------------------
    // Derived display values (recomputed on every read, never cached)
    // -------------------------------------------------------------------------

    /// Page title: brand and product name.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.product_name)
    }

    /// Image for the selected variant, or the placeholder when the
    /// variant has no image of its own.
    pub fn image(&self) -> &str {
        let image = self.selected_variant().image.as_str();
        if image.is_empty() {
            FALLBACK_IMAGE
        } else {
            image
        }
    }

    /// Whether the selected variant has stock.
    pub fn in_stock(&self) -> bool {
        self.selected_variant().in_stock()
    }

    /// Fixed sale banner text for the selected variant.
    pub fn sale_message(&self) -> String {
        if self.selected_variant().on_sale {
            format!("{} is on sale!", self.title())
        } else {
            format!("{} is not on sale", self.title())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn socks_catalog() -> Catalog {
        Catalog::new(
            "Vue Mastery",
            "Socks",
            "A pair of socks",
            vec!["80% cotton".to_string(), "20% polyester".to_string()],
            vec![
                Variant::new(2234, "green", "./assets/vmSocks-green-onWhite.jpg", 10, true),
                Variant::new(2235, "blue", "./assets/vmSocks-blue-onWhite.jpg", 0, false),
                Variant::new(2236, "red", "", 3, false),
            ],
        )
    }

    #[test]
    fn test_title_combines_brand_and_product() {
        assert_eq!(socks_catalog().title(), "Vue Mastery Socks");
    }

    #[test]
    fn test_select_variant_drives_image() {
        let mut catalog = socks_catalog();
        assert_eq!(catalog.image(), "./assets/vmSocks-green-onWhite.jpg");

        catalog.select_variant(1);
        assert_eq!(catalog.image(), "./assets/vmSocks-blue-onWhite.jpg");
    }

    #[test]
    fn test_image_falls_back_when_empty() {
        let mut catalog = socks_catalog();
        catalog.select_variant(2);
        assert_eq!(catalog.image(), FALLBACK_IMAGE);
    }

    #[test]
    fn test_in_stock_follows_selection() {
        let mut catalog = socks_catalog();
        assert!(catalog.in_stock());

        catalog.select_variant(1);
        assert!(!catalog.in_stock());
    }

    #[test]
    fn test_sale_message() {
        let mut catalog = socks_catalog();
        assert_eq!(catalog.sale_message(), "Vue Mastery Socks is on sale!");

        catalog.select_variant(1);
        assert_eq!(catalog.sale_message(), "Vue Mastery Socks is not on sale");
    }

    #[test]
    #[should_panic(expected = "variant index 3 out of range")]
    fn test_select_variant_out_of_range_panics() {
        socks_catalog().select_variant(3);
    }

    #[test]
    #[should_panic(expected = "at least one variant")]
    fn test_empty_catalog_panics() {
        Catalog::new("Brand", "Thing", "alt", vec![], vec![]);
    }

    #[test]
    fn test_shipping_for_member() {
        assert_eq!(Shipping::for_member(true), Shipping::Free);
        assert_eq!(Shipping::for_member(false), Shipping::Flat { cents: 299 });
    }

    #[test]
    fn test_shipping_labels() {
        assert_eq!(Shipping::Free.label(), "Free");
        assert_eq!(Shipping::Flat { cents: 299 }.label(), "$2.99");
        assert_eq!(Shipping::Flat { cents: 1005 }.label(), "$10.05");
    }
}
