//! # Pricing Rules
//!
//! The coupon catalog and discount calculation.
//!
//! ## Discount Flow
//! ```text
//! calculate_discount(price, code)
//!      │
//!      ├── price not a positive number? → Invalid(..)
//!      ├── code not a string?           → Invalid(..)
//!      │
//!      ├── code in catalog?  → Priced(price × (1 − discount))
//!      └── unknown code      → Priced(price)
//! ```
//!
//! Prices are plain `f64` here and no rounding is applied beyond what the
//! multiplication itself does.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

// =============================================================================
// Coupon Catalog
// =============================================================================

/// A discount code. `discount` is a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coupon {
    pub code: &'static str,
    pub discount: f64,
}

const COUPONS: [Coupon; 2] = [
    Coupon {
        code: "SAVE20",
        discount: 0.2,
    },
    Coupon {
        code: "SAVE10",
        discount: 0.1,
    },
];

/// Returns the fixed coupon catalog.
pub fn get_coupons() -> &'static [Coupon] {
    &COUPONS
}

/// Looks up a coupon by exact code.
pub fn find_coupon(code: &str) -> Option<&'static Coupon> {
    COUPONS.iter().find(|coupon| coupon.code == code)
}

// =============================================================================
// Discount Calculation
// =============================================================================

/// Applies `code` to `price`.
///
/// ## Errors
/// [`ValidationError::MustBePositive`] when `price <= 0` or is NaN.
///
/// ## Example
/// ```rust
/// use primer_core::pricing::discounted_price;
///
/// assert_eq!(discounted_price(10.0, "SAVE20").unwrap(), 8.0);
/// assert_eq!(discounted_price(10.0, "NOPE").unwrap(), 10.0);
/// assert!(discounted_price(-10.0, "SAVE10").is_err());
/// ```
pub fn discounted_price(price: f64, code: &str) -> ValidationResult<f64> {
    if price.is_nan() || price <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(match find_coupon(code) {
        Some(coupon) => price * (1.0 - coupon.discount),
        None => price,
    })
}

/// Outcome of [`calculate_discount`].
#[derive(Debug, Clone, PartialEq)]
pub enum DiscountOutcome {
    /// Final price after any discount.
    Priced(f64),
    Invalid(ValidationError),
}

impl DiscountOutcome {
    pub fn price(&self) -> Option<f64> {
        match self {
            DiscountOutcome::Priced(price) => Some(*price),
            DiscountOutcome::Invalid(_) => None,
        }
    }
}

impl fmt::Display for DiscountOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountOutcome::Priced(price) => write!(f, "{}", price),
            DiscountOutcome::Invalid(err) => write!(f, "{}", err),
        }
    }
}

/// Dynamic form of [`discounted_price`] for loosely-typed input.
///
/// A numeric string such as `"10"` is not a price: only JSON numbers are.
pub fn calculate_discount(price: &Value, code: &Value) -> DiscountOutcome {
    let Some(price) = price.as_f64() else {
        return DiscountOutcome::Invalid(ValidationError::WrongType {
            field: "price".to_string(),
            expected: "a number".to_string(),
        });
    };

    let Some(code) = code.as_str() else {
        return DiscountOutcome::Invalid(ValidationError::WrongType {
            field: "discount code".to_string(),
            expected: "a string".to_string(),
        });
    };

    match discounted_price(price, code) {
        Ok(price) => DiscountOutcome::Priced(price),
        Err(err) => DiscountOutcome::Invalid(err),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
