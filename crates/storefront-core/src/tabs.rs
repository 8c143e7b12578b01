//! # Tab Selector
//!
//! The four fixed sub-views of the product detail panel. Purely local
//! state: selecting a tab has no side effect on any other component.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Tab
// =============================================================================

/// One of the four mutually exclusive sub-views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Reviews,
    MakeAReview,
    Shipping,
    Details,
}

impl Tab {
    /// All tabs, in display order.
    pub const ALL: [Tab; 4] = [Tab::Reviews, Tab::MakeAReview, Tab::Shipping, Tab::Details];

    /// The label shown on the tab strip.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Reviews => "Reviews",
            Tab::MakeAReview => "Make a Review",
            Tab::Shipping => "Shipping",
            Tab::Details => "Details",
        }
    }
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Reviews
    }
}

// =============================================================================
// Tab Strip
// =============================================================================

/// Tracks which tab is active. Exactly one is active at a time;
/// the initial tab is Reviews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabStrip {
    active: Tab,
}

impl TabStrip {
    /// Creates a strip with the default tab (Reviews) active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates `tab` unconditionally; all four tabs are always legal.
    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    /// The currently active tab.
    #[inline]
    pub fn active(&self) -> Tab {
        self.active
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_is_reviews() {
        assert_eq!(TabStrip::new().active(), Tab::Reviews);
    }

    #[test]
    fn test_last_selection_wins() {
        let mut strip = TabStrip::new();
        strip.select(Tab::Shipping);
        strip.select(Tab::Details);
        assert_eq!(strip.active(), Tab::Details);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = Tab::ALL.iter().map(Tab::label).collect();
        assert_eq!(labels, vec!["Reviews", "Make a Review", "Shipping", "Details"]);
    }
}
