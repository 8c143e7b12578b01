//! # Scripted Session Demo
//!
//! Runs one page session end to end and prints the resulting view
//! models as JSON, so the render boundary can be inspected without a
//! host rendering layer attached.
//!
//! ## Usage
//! ```bash
//! cargo run -p storefront-page --bin demo
//!
//! # With state-operation logging
//! RUST_LOG=debug cargo run -p storefront-page --bin demo
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

use storefront_core::{Catalog, Recommend, Tab, Variant};
use storefront_page::PageSession;

/// The product from the original demo page: socks in two colors,
/// the green pair on sale.
fn socks_catalog() -> Catalog {
    Catalog::new(
        "Vue Mastery",
        "Socks",
        "A pair of socks",
        vec![
            "80% cotton".to_string(),
            "20% polyester".to_string(),
            "Gender-neutral".to_string(),
        ],
        vec![
            Variant::new(2234, "green", "./assets/vmSocks-green-onWhite.jpg", 10, true),
            Variant::new(2235, "blue", "./assets/vmSocks-blue-onWhite.jpg", 10, false),
        ],
    )
}

fn main() {
    // Default to info; RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut session = PageSession::new(socks_catalog(), true);

    // Browse: hover the blue swatch, then back to green.
    session.select_variant(1);
    session.select_variant(0);

    // Shop: two greens and a blue, then drop the middle row.
    session.add_to_cart();
    session.add_to_cart();
    session.select_variant(1);
    session.add_to_cart();
    session.remove_cart_item(1);

    // A failed review attempt: everything but the name.
    session.set_review_text("Best socks I have ever owned.");
    session.set_review_rating(5);
    session.set_review_recommend(Recommend::Yes);
    if !session.submit_review() {
        info!(errors = ?session.view().review_form.errors, "review rejected");
    }

    // Fix the name and resubmit.
    session.set_review_name("Alice");
    if !session.submit_review() {
        info!(errors = ?session.view().review_form.errors, "review rejected again");
    }

    // Read the reviews, then check shipping.
    session.select_tab(Tab::Reviews);
    session.select_tab(Tab::Shipping);

    let page = session.view();
    println!(
        "{}",
        serde_json::to_string_pretty(&page).expect("view model serializes")
    );

    info!(
        cart_items = page.cart.items.len(),
        reviews = page.tabs.reviews.len(),
        active_tab = %page.tabs.active,
        "session script finished"
    );
}
