//! # Error Types
//!
//! Typed validation errors for storefront-core.
//!
//! ## Error Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Error Surfaces                               │
//! │                                                                     │
//! │  Review form (this file)                                            │
//! │  └── ValidationError  - the only user-facing failure path           │
//! │                                                                     │
//! │  Everything else                                                    │
//! │  └── Fatal precondition panics (caller bugs, never recoverable):    │
//! │      out-of-range variant index, positional removal past the end,   │
//! │      remove-last on an empty cart                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant renders the exact text shown to the user

use std::fmt;

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Review Field
// =============================================================================

/// The four fields of the review form, in the order errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewField {
    Name,
    Text,
    Rating,
    Recommendation,
}

impl fmt::Display for ReviewField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // These feed directly into user-facing error text, so the
        // wording is fixed ("Review", not "Text", for the body field).
        let label = match self {
            ReviewField::Name => "Name",
            ReviewField::Text => "Review",
            ReviewField::Rating => "Rating",
            ReviewField::Recommendation => "Recommendation",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Review-form validation errors.
///
/// The rendered `Display` text is exactly what the form shows the user,
/// one line per missing field ("Name required.", "Review required.", ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} required.")]
    Required { field: ReviewField },

    /// Numeric value is outside the allowed range.
    #[error("{field} must be between {min} and {max}.")]
    OutOfRange { field: ReviewField, min: u8, max: u8 },
}

impl ValidationError {
    /// The field this error is about.
    pub fn field(&self) -> ReviewField {
        match self {
            ValidationError::Required { field } => *field,
            ValidationError::OutOfRange { field, .. } => *field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_messages_match_form_text() {
        let cases = [
            (ReviewField::Name, "Name required."),
            (ReviewField::Text, "Review required."),
            (ReviewField::Rating, "Rating required."),
            (ReviewField::Recommendation, "Recommendation required."),
        ];

        for (field, expected) in cases {
            let err = ValidationError::Required { field };
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_out_of_range_message() {
        let err = ValidationError::OutOfRange {
            field: ReviewField::Rating,
            min: 1,
            max: 5,
        };
        assert_eq!(err.to_string(), "Rating must be between 1 and 5.");
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::Required {
            field: ReviewField::Recommendation,
        };
        assert_eq!(err.field(), ReviewField::Recommendation);
    }
}
