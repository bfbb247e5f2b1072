//! # Error Types
//!
//! Domain-specific error types for primer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  primer-core errors (this file)                                        │
//! │  ├── CoreError        - Signaled failures (empty stack, factorial)     │
//! │  └── ValidationError  - Why an input was rejected                      │
//! │                                                                         │
//! │  primer-services errors (separate crate)                               │
//! │  └── ServiceError     - Collaborator and configuration failures        │
//! │                                                                         │
//! │  ValidationError rides inside verdict values (InputVerdict,            │
//! │  DiscountOutcome) or comes back as Err from checked constructors.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every ValidationError message starts with "Invalid"
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Failures a caller must handle explicitly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// `pop` or `peek` was called on a stack with no items.
    #[error("Stack is empty")]
    EmptyStack,

    /// Factorial has no value for negative input.
    #[error("Factorial is not defined for negative input {0}")]
    NegativeFactorial(i64),

    /// The factorial does not fit in a `u64` (anything above 20!).
    #[error("Factorial of {0} overflows u64")]
    FactorialOverflow(i64),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The `Invalid` prefix on every message is the marker callers match on
/// when they only have the rendered string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value has the wrong runtime type (e.g. a number where text was expected).
    #[error("Invalid {field}: expected {expected}")]
    WrongType { field: String, expected: String },

    /// Text length outside the inclusive bounds.
    #[error("Invalid {field}: must be between {min} and {max} characters")]
    LengthOutOfRange { field: String, min: usize, max: usize },

    /// Numeric value outside the inclusive bounds.
    #[error("Invalid {field}: must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must be strictly greater than zero.
    #[error("Invalid {field}: must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or more.
    #[error("Invalid {field}: must not be negative")]
    MustNotBeNegative { field: String },

    /// Country code outside the recognized set.
    #[error("Invalid country code: {0}")]
    UnknownCountry(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::EmptyStack.to_string(), "Stack is empty");
        assert_eq!(
            CoreError::NegativeFactorial(-1).to_string(),
            "Factorial is not defined for negative input -1"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::LengthOutOfRange {
            field: "username".to_string(),
            min: 3,
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "Invalid username: must be between 3 and 255 characters"
        );

        let err = ValidationError::OutOfRange {
            field: "age".to_string(),
            min: 18.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "Invalid age: must be between 18 and 100");
    }

    #[test]
    fn test_every_validation_message_carries_marker() {
        let errors = [
            ValidationError::WrongType {
                field: "price".to_string(),
                expected: "a number".to_string(),
            },
            ValidationError::MustBePositive {
                field: "price".to_string(),
            },
            ValidationError::MustNotBeNegative {
                field: "totalAmount".to_string(),
            },
            ValidationError::UnknownCountry("CN".to_string()),
        ];

        for err in errors {
            assert!(err.to_string().starts_with("Invalid"), "{err}");
        }
    }
}
