//! # Validation Module
//!
//! Field validators for the review form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Review Submit Validation                        │
//! │                                                                     │
//! │  submit attempt                                                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  validate_draft(draft) ◄── recomputed from scratch EVERY attempt    │
//! │       │                                                             │
//! │       ├── name empty?            → "Name required."                 │
//! │       ├── review text empty?     → "Review required."               │
//! │       ├── rating unpicked?       → "Rating required."               │
//! │       └── recommendation unset?  → "Recommendation required."       │
//! │                                                                     │
//! │  Errors are reported in that fixed field order, one per field.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ReviewField, ValidationError, ValidationResult};
use crate::review::{Recommend, ReviewDraft};
use crate::{MAX_RATING, MIN_RATING};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the reviewer name: present and non-blank.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: ReviewField::Name,
        });
    }
    Ok(())
}

/// Validates the review body: present and non-blank.
pub fn validate_text(text: &str) -> ValidationResult<()> {
    if text.trim().is_empty() {
        return Err(ValidationError::Required {
            field: ReviewField::Text,
        });
    }
    Ok(())
}

/// Validates the rating: picked and within 1 to 5.
///
/// The original form's dropdown could only yield 1-5; as a library API
/// the range has to be enforced here instead.
pub fn validate_rating(rating: Option<u8>) -> ValidationResult<()> {
    match rating {
        None => Err(ValidationError::Required {
            field: ReviewField::Rating,
        }),
        Some(r) if !(MIN_RATING..=MAX_RATING).contains(&r) => Err(ValidationError::OutOfRange {
            field: ReviewField::Rating,
            min: MIN_RATING,
            max: MAX_RATING,
        }),
        Some(_) => Ok(()),
    }
}

/// Validates the recommendation: one radio button picked.
pub fn validate_recommendation(recommend: Option<Recommend>) -> ValidationResult<()> {
    if recommend.is_none() {
        return Err(ValidationError::Required {
            field: ReviewField::Recommendation,
        });
    }
    Ok(())
}

// =============================================================================
// Draft Validator
// =============================================================================

/// Validates a whole draft, collecting one error per failing field in
/// fixed order: name, review text, rating, recommendation.
pub fn validate_draft(draft: &ReviewDraft) -> Vec<ValidationError> {
    [
        validate_name(&draft.name),
        validate_text(&draft.text),
        validate_rating(draft.rating),
        validate_recommendation(draft.recommend),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Alice").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_text() {
        assert!(validate_text("Loved them").is_ok());
        assert!(validate_text("").is_err());
    }

    #[test]
    fn test_validate_rating() {
        assert!(validate_rating(Some(1)).is_ok());
        assert!(validate_rating(Some(5)).is_ok());

        assert!(validate_rating(None).is_err());
        assert!(validate_rating(Some(0)).is_err());
        assert!(validate_rating(Some(6)).is_err());
    }

    #[test]
    fn test_validate_recommendation() {
        assert!(validate_recommendation(Some(Recommend::No)).is_ok());
        assert!(validate_recommendation(None).is_err());
    }

    #[test]
    fn test_validate_draft_order() {
        let draft = ReviewDraft::new();
        let messages: Vec<String> = validate_draft(&draft)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            messages,
            vec![
                "Name required.",
                "Review required.",
                "Rating required.",
                "Recommendation required.",
            ]
        );
    }
}
