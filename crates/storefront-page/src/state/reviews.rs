//! # Review List State
//!
//! The ordered list of submitted reviews. Populated only through the
//! event channel's review-submitted topic: the product view's
//! subscription closure holds a clone of this state and appends to it,
//! while the Reviews tab renders from snapshots of the same list.

use std::sync::{Arc, Mutex};

use tracing::debug;

use storefront_core::Review;

/// Session-owned review list.
///
/// Reviews are append-only in this scope: never mutated, never removed.
#[derive(Debug, Clone, Default)]
pub struct ReviewsState {
    reviews: Arc<Mutex<Vec<Review>>>,
}

impl ReviewsState {
    /// Creates an empty review list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a submitted review.
    pub fn push(&self, review: Review) {
        let mut reviews = self.reviews.lock().expect("reviews mutex poisoned");
        reviews.push(review);
        debug!(count = reviews.len(), "review appended");
    }

    /// Owned copy of the review list, in submission order.
    pub fn snapshot(&self) -> Vec<Review> {
        self.reviews.lock().expect("reviews mutex poisoned").clone()
    }

    /// Number of submitted reviews.
    pub fn len(&self) -> usize {
        self.reviews.lock().expect("reviews mutex poisoned").len()
    }

    /// Checks if no reviews have been submitted yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use storefront_core::Recommend;

    fn review(name: &str) -> Review {
        Review {
            name: name.to_string(),
            text: "Great socks".to_string(),
            rating: 4,
            recommend: Recommend::Yes,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_push_keeps_submission_order() {
        let state = ReviewsState::new();
        state.push(review("Alice"));
        state.push(review("Bob"));

        let names: Vec<String> = state.snapshot().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_clones_share_one_list() {
        let state = ReviewsState::new();
        let handler_copy = state.clone();

        handler_copy.push(review("Alice"));
        assert_eq!(state.len(), 1);
        assert!(!state.is_empty());
    }
}
