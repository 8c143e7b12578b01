//! # Review Form
//!
//! The make-a-review form. Validates locally and, on success, publishes
//! the review on the event channel; it holds no reference to the review
//! list it ultimately feeds.

use tracing::{debug, info};

use storefront_core::{Recommend, ReviewDraft, ValidationError};

use crate::events::{Event, EventBus};
use crate::view::ReviewFormViewModel;

/// The review form: a draft plus the bus it publishes on.
#[derive(Debug)]
pub struct ReviewForm {
    draft: ReviewDraft,
    bus: EventBus,
}

impl ReviewForm {
    /// Creates a blank form publishing on the injected `bus`.
    pub fn new(bus: EventBus) -> Self {
        ReviewForm {
            draft: ReviewDraft::new(),
            bus,
        }
    }

    // -------------------------------------------------------------------------
    // Field inputs
    // -------------------------------------------------------------------------

    /// Name input changed.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Review body changed.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    /// Rating picked from the dropdown.
    pub fn set_rating(&mut self, rating: u8) {
        self.draft.rating = Some(rating);
    }

    /// Recommendation radio button picked.
    pub fn set_recommend(&mut self, recommend: Recommend) {
        self.draft.recommend = Some(recommend);
    }

    // -------------------------------------------------------------------------
    // Submit
    // -------------------------------------------------------------------------

    /// Form submit.
    ///
    /// On success the validated review is published under the
    /// review-submitted topic and the form returns to blank; on failure
    /// the error list is kept for rendering and the fields survive.
    /// Returns whether a review was published.
    pub fn submit(&mut self) -> bool {
        match self.draft.submit() {
            Ok(review) => {
                info!(name = %review.name, rating = review.rating, "review submitted");
                self.bus.publish(Event::ReviewSubmitted(review));
                true
            }
            Err(errors) => {
                debug!(errors = errors.len(), "review submit rejected");
                false
            }
        }
    }

    /// Errors from the last submit attempt, in field order.
    pub fn errors(&self) -> &[ValidationError] {
        self.draft.errors()
    }

    /// Builds the form's view model (field echoes plus error lines).
    pub fn view(&self) -> ReviewFormViewModel {
        ReviewFormViewModel {
            name: self.draft.name.clone(),
            text: self.draft.text.clone(),
            rating: self.draft.rating,
            recommend: self.draft.recommend.map(|r| r.label().to_string()),
            errors: self.draft.errors().iter().map(ToString::to_string).collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::events::Topic;
    use storefront_core::Review;

    fn fill(form: &mut ReviewForm) {
        form.set_name("Alice");
        form.set_text("Great socks");
        form.set_rating(5);
        form.set_recommend(Recommend::Yes);
    }

    #[test]
    fn test_submit_publishes_and_clears() {
        let bus = EventBus::new();
        let received: Arc<Mutex<Vec<Review>>> = Arc::default();

        let sink = Arc::clone(&received);
        bus.subscribe(Topic::ReviewSubmitted, move |event| {
            let Event::ReviewSubmitted(review) = event;
            sink.lock().unwrap().push(review.clone());
        });

        let mut form = ReviewForm::new(bus);
        fill(&mut form);
        assert!(form.submit());

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].name, "Alice");

        // Form returned to blank Editing.
        let view = form.view();
        assert!(view.name.is_empty());
        assert!(view.rating.is_none());
        assert!(view.errors.is_empty());
    }

    #[test]
    fn test_invalid_submit_publishes_nothing() {
        let bus = EventBus::new();
        let mut form = ReviewForm::new(bus.clone());

        fill(&mut form);
        form.set_name(""); // knock out one field
        assert!(!form.submit());

        let view = form.view();
        assert_eq!(view.errors, vec!["Name required."]);
        assert_eq!(view.text, "Great socks"); // fields retained
    }

    #[test]
    fn test_submit_without_subscribers_still_succeeds() {
        // Publishing into the void is a no-op, not an error.
        let mut form = ReviewForm::new(EventBus::new());
        fill(&mut form);
        assert!(form.submit());
    }
}
