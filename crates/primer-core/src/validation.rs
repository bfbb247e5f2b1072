//! # Validation Module
//!
//! Input checks for prices, usernames, driving age and the sign-up form.
//!
//! ## Typed vs Dynamic Input
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Entry Points                                   │
//! │                                                                         │
//! │  Typed (&str, f64)                Dynamic (serde_json::Value)           │
//! │  ─────────────────                ───────────────────────────           │
//! │  validate_username("alice")       is_valid_username(&json!(42))         │
//! │  validate_age(28.0)               validate_user_input(&name, &age)      │
//! │        │                                   │                            │
//! │        │                                   ├── wrong type? → rejected   │
//! │        │                                   │                            │
//! │        └────────────── shared rules ◄──────┘                            │
//! │                                                                         │
//! │  Form data arrives as JSON, so a username can be a number and an age   │
//! │  can be a string. The dynamic functions check the runtime type first.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use primer_core::validation::{can_drive, is_valid_username, validate_user_input};
//! use serde_json::json;
//!
//! assert!(is_valid_username(&json!("gojosatoru")));
//! assert!(!is_valid_username(&json!(null)));
//!
//! assert_eq!(can_drive(16, "US").is_eligible(), Some(true));
//! assert_eq!(can_drive(16, "CN").is_eligible(), None);
//!
//! assert!(validate_user_input(&json!("gojosatoru"), &json!(28)).is_valid());
//! ```

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::ValidationError;
use crate::{
    SIGNUP_MAX_AGE, SIGNUP_MIN_AGE, SIGNUP_USERNAME_MAX_LEN, SIGNUP_USERNAME_MIN_LEN,
    USERNAME_MAX_LEN, USERNAME_MIN_LEN,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Price Validators
// =============================================================================

/// Returns true when `min <= price <= max`.
///
/// ## Example
/// ```rust
/// use primer_core::validation::is_price_in_range;
///
/// assert!(is_price_in_range(0.0, 0.0, 100.0));
/// assert!(is_price_in_range(100.0, 0.0, 100.0));
/// assert!(!is_price_in_range(-10.0, 0.0, 100.0));
/// ```
pub fn is_price_in_range(price: f64, min: f64, max: f64) -> bool {
    price >= min && price <= max
}

// =============================================================================
// Username Validators
// =============================================================================

/// Checks that a username is 5 to 15 characters long.
///
/// Length is counted in characters, not bytes.
pub fn validate_username(name: &str) -> ValidationResult<()> {
    check_length("username", name, USERNAME_MIN_LEN, USERNAME_MAX_LEN)
}

/// Dynamic form of [`validate_username`]: anything other than a JSON
/// string (null, number, bool, ...) is rejected.
pub fn is_valid_username(name: &Value) -> bool {
    name.as_str()
        .map(|name| validate_username(name).is_ok())
        .unwrap_or(false)
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> ValidationResult<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::LengthOutOfRange {
            field: field.to_string(),
            min,
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Driving Age
// =============================================================================

/// Countries with a known legal driving age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Country {
    Us,
    Uk,
}

impl Country {
    /// Minimum age at which a licence can be held.
    pub const fn min_driving_age(&self) -> u32 {
        match self {
            Country::Us => 16,
            Country::Uk => 17,
        }
    }
}

impl FromStr for Country {
    type Err = ValidationError;

    /// Codes are matched exactly: "US" and "UK" only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "US" => Ok(Country::Us),
            "UK" => Ok(Country::Uk),
            other => Err(ValidationError::UnknownCountry(other.to_string())),
        }
    }
}

/// Outcome of [`can_drive`].
///
/// An unrecognized country is its own variant so it can never be
/// mistaken for a plain "no".
#[derive(Debug, Clone, PartialEq)]
pub enum DriveEligibility {
    Eligible,
    Underage { min_age: u32 },
    InvalidCountry(ValidationError),
}

impl DriveEligibility {
    /// `Some(true/false)` for a recognized country, `None` otherwise.
    pub fn is_eligible(&self) -> Option<bool> {
        match self {
            DriveEligibility::Eligible => Some(true),
            DriveEligibility::Underage { .. } => Some(false),
            DriveEligibility::InvalidCountry(_) => None,
        }
    }
}

impl fmt::Display for DriveEligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveEligibility::Eligible => write!(f, "Eligible to drive"),
            DriveEligibility::Underage { min_age } => {
                write!(f, "Not eligible: minimum driving age is {}", min_age)
            }
            DriveEligibility::InvalidCountry(err) => write!(f, "{}", err),
        }
    }
}

/// Checks `age` against the legal driving age of `country_code`.
///
/// ## Rules
/// ```text
/// "US" → age >= 16
/// "UK" → age >= 17
/// else → InvalidCountry
/// ```
pub fn can_drive(age: u32, country_code: &str) -> DriveEligibility {
    let country = match country_code.parse::<Country>() {
        Ok(country) => country,
        Err(err) => return DriveEligibility::InvalidCountry(err),
    };

    let min_age = country.min_driving_age();
    if age >= min_age {
        DriveEligibility::Eligible
    } else {
        DriveEligibility::Underage { min_age }
    }
}

// =============================================================================
// Sign-up Form
// =============================================================================

/// Checks a sign-up age: 18 to 100 inclusive. NaN is rejected.
pub fn validate_age(age: f64) -> ValidationResult<()> {
    if !(SIGNUP_MIN_AGE..=SIGNUP_MAX_AGE).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: SIGNUP_MIN_AGE,
            max: SIGNUP_MAX_AGE,
        });
    }

    Ok(())
}

/// Outcome of [`validate_user_input`].
#[derive(Debug, Clone, PartialEq)]
pub enum InputVerdict {
    Valid,
    /// Every rule that failed, username first.
    Invalid(Vec<ValidationError>),
}

impl InputVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, InputVerdict::Valid)
    }
}

impl fmt::Display for InputVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputVerdict::Valid => write!(f, "Validation successful"),
            InputVerdict::Invalid(errors) => {
                let reasons: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "Invalid input: {}", reasons.join("; "))
            }
        }
    }
}

/// Validates the sign-up form.
///
/// ## Rules
/// - `username`: a string of 3 to 255 characters
/// - `age`: a number between 18 and 100
///
/// Both fields are checked so the verdict lists every problem at once.
///
/// ## User Workflow
/// ```text
/// validate_user_input("gojosatoru", "18")
///      │
///      ├── username: string, 10 chars    ✓
///      │
///      ├── age: string, not a number     ✗ WrongType
///      │
///      ▼
/// Invalid([WrongType { field: "age", .. }])
///      │
///      ▼
/// "Invalid input: Invalid age: expected a number"
/// ```
pub fn validate_user_input(username: &Value, age: &Value) -> InputVerdict {
    let mut errors = Vec::new();

    match username.as_str() {
        Some(name) => {
            if let Err(err) = check_length(
                "username",
                name,
                SIGNUP_USERNAME_MIN_LEN,
                SIGNUP_USERNAME_MAX_LEN,
            ) {
                errors.push(err);
            }
        }
        None => errors.push(ValidationError::WrongType {
            field: "username".to_string(),
            expected: "a string".to_string(),
        }),
    }

    match age.as_f64() {
        Some(age) => {
            if let Err(err) = validate_age(age) {
                errors.push(err);
            }
        }
        None => errors.push(ValidationError::WrongType {
            field: "age".to_string(),
            expected: "a number".to_string(),
        }),
    }

    if errors.is_empty() {
        InputVerdict::Valid
    } else {
        InputVerdict::Invalid(errors)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
