//! # Review Records and the Review-Form Draft
//!
//! A [`Review`] is created only through a successful submit of a
//! [`ReviewDraft`]; it is never mutated and never removed afterwards.
//!
//! ## Form State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Review Form Lifecycle                          │
//! │                                                                     │
//! │              ┌─────────────┐   submit, all four fields set          │
//! │   typing ───►│   Editing   │──────────────────────────┐             │
//! │              └──────┬──────┘                          ▼             │
//! │                     │ submit,                  Review built,        │
//! │                     │ field missing            fields reset to      │
//! │                     ▼                          blank Editing        │
//! │              ┌─────────────┐                                        │
//! │              │   Invalid   │  error list recomputed from scratch    │
//! │              │ (rendered)  │  each attempt; field values retained   │
//! │              └─────────────┘                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation;

// =============================================================================
// Recommend
// =============================================================================

/// Answer to "Would you recommend this product?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Recommend {
    Yes,
    No,
}

impl Recommend {
    /// The radio-button label ("Yes" / "No").
    pub fn label(&self) -> &'static str {
        match self {
            Recommend::Yes => "Yes",
            Recommend::No => "No",
        }
    }
}

// =============================================================================
// Review
// =============================================================================

/// A submitted product review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Review {
    /// Reviewer name (non-empty).
    pub name: String,

    /// Free-text review body (non-empty).
    pub text: String,

    /// Star rating, 1 to 5.
    pub rating: u8,

    /// Whether the reviewer recommends the product.
    pub recommend: Recommend,

    /// When the review passed validation.
    #[ts(as = "String")]
    pub submitted_at: DateTime<Utc>,
}

// =============================================================================
// Review Draft
// =============================================================================

/// The editable state behind the review form.
///
/// Field values survive a failed submit so the user can fix only what
/// is missing; `errors` holds the result of the last attempt and is
/// recomputed from scratch on every submit, never accumulated.
#[derive(Debug, Clone, Default)]
pub struct ReviewDraft {
    /// Reviewer name input.
    pub name: String,

    /// Review body input.
    pub text: String,

    /// Rating, once one has been picked.
    pub rating: Option<u8>,

    /// Recommendation, once one has been picked.
    pub recommend: Option<Recommend>,

    errors: Vec<ValidationError>,
}

impl ReviewDraft {
    /// Creates a blank draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors from the last submit attempt, in field order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Attempts to submit the draft.
    ///
    /// ## Behavior
    /// - All four fields present: builds the [`Review`], resets every
    ///   field to blank, clears the error list, returns `Ok`.
    /// - Any field missing: recomputes the error list (one fixed message
    ///   per missing field, order: name, review text, rating,
    ///   recommendation), retains field values, returns `Err`.
    pub fn submit(&mut self) -> Result<Review, Vec<ValidationError>> {
        self.errors = validation::validate_draft(self);
        if !self.errors.is_empty() {
            return Err(self.errors.clone());
        }

        // Validation guarantees presence of both optional fields.
        // Field values are stored exactly as entered; trimming happens
        // only inside the presence checks.
        let review = Review {
            name: self.name.clone(),
            text: self.text.clone(),
            rating: self.rating.expect("validated rating"),
            recommend: self.recommend.expect("validated recommendation"),
            submitted_at: Utc::now(),
        };

        *self = ReviewDraft::new();
        Ok(review)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReviewField;

    fn filled_draft() -> ReviewDraft {
        ReviewDraft {
            name: "Alice".to_string(),
            text: "Great socks".to_string(),
            rating: Some(5),
            recommend: Some(Recommend::Yes),
            ..ReviewDraft::default()
        }
    }

    #[test]
    fn test_submit_builds_review_and_resets_fields() {
        let mut draft = filled_draft();
        let review = draft.submit().unwrap();

        assert_eq!(review.name, "Alice");
        assert_eq!(review.text, "Great socks");
        assert_eq!(review.rating, 5);
        assert_eq!(review.recommend, Recommend::Yes);

        // Back to blank Editing.
        assert!(draft.name.is_empty());
        assert!(draft.text.is_empty());
        assert!(draft.rating.is_none());
        assert!(draft.recommend.is_none());
        assert!(draft.errors().is_empty());
    }

    #[test]
    fn test_submit_missing_name_reports_single_error() {
        let mut draft = filled_draft();
        draft.name.clear();

        let errors = draft.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "Name required.");

        // Field values are retained for the next attempt.
        assert_eq!(draft.text, "Great socks");
        assert_eq!(draft.rating, Some(5));
    }

    #[test]
    fn test_errors_recomputed_not_accumulated() {
        let mut draft = ReviewDraft::new();

        // First attempt: everything missing, four errors in field order.
        let errors = draft.submit().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.iter().map(ValidationError::field).collect::<Vec<_>>(),
            vec![
                ReviewField::Name,
                ReviewField::Text,
                ReviewField::Rating,
                ReviewField::Recommendation,
            ]
        );

        // Second attempt with name fixed: three errors, not seven.
        draft.name = "Bob".to_string();
        let errors = draft.submit().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(draft.errors().len(), 3);
    }

    #[test]
    fn test_submit_preserves_fields_exactly_as_entered() {
        let mut draft = filled_draft();
        draft.name = " Alice ".to_string();
        draft.text = "Great socks ".to_string();

        let review = draft.submit().unwrap();
        assert_eq!(review.name, " Alice ");
        assert_eq!(review.text, "Great socks ");
    }

    #[test]
    fn test_whitespace_only_name_is_missing() {
        let mut draft = filled_draft();
        draft.name = "   ".to_string();

        let errors = draft.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "Name required.");
    }

    #[test]
    fn test_recommend_labels() {
        assert_eq!(Recommend::Yes.label(), "Yes");
        assert_eq!(Recommend::No.label(), "No");
    }
}
