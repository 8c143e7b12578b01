//! # Product Tabs
//!
//! The four-way tab panel (Reviews / Make a Review / Shipping /
//! Details). Selection is purely local; the pane contents are read-only
//! projections of state owned elsewhere.

use tracing::debug;

use storefront_core::{Review, Shipping, Tab, TabStrip};

use crate::view::TabsViewModel;

/// The tab panel component.
#[derive(Debug, Default)]
pub struct ProductTabs {
    strip: TabStrip,
}

impl ProductTabs {
    /// Creates the panel with the Reviews tab active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tab clicked. All four tabs are always legal; no other state moves.
    pub fn select_tab(&mut self, tab: Tab) {
        debug!(?tab, "tab selected");
        self.strip.select(tab);
    }

    /// The currently active tab.
    pub fn active_tab(&self) -> Tab {
        self.strip.active()
    }

    /// Builds the tab panel view from the state the panes project.
    pub fn view(&self, reviews: &[Review], shipping: Shipping, details: &[String]) -> TabsViewModel {
        TabsViewModel::build(self.strip.active(), reviews, shipping, details)
    }
}
