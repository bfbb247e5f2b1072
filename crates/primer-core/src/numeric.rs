//! # Numeric Helpers
//!
//! Small pure functions over numbers and slices.

use crate::error::{CoreError, CoreResult};

/// Returns the larger of `a` and `b`, preferring `a` on a tie.
///
/// ## Example
/// ```rust
/// use primer_core::numeric::max;
///
/// assert_eq!(max(2, 1), 2);
/// assert_eq!(max(1, 2), 2);
/// assert_eq!(max(1.5, 1.5), 1.5);
/// ```
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a >= b {
        a
    } else {
        b
    }
}

/// Computes `n!`.
///
/// ## Errors
/// - [`CoreError::NegativeFactorial`] for `n < 0`
/// - [`CoreError::FactorialOverflow`] when the product exceeds `u64::MAX` (n > 20)
///
/// ## Example
/// ```rust
/// use primer_core::numeric::factorial;
///
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(4).unwrap(), 24);
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> CoreResult<u64> {
    if n < 0 {
        return Err(CoreError::NegativeFactorial(n));
    }

    (2..=n as u64).try_fold(1u64, |acc, i| {
        acc.checked_mul(i).ok_or(CoreError::FactorialOverflow(n))
    })
}

/// Arithmetic mean of `numbers`.
///
/// Returns `f64::NAN` for an empty slice; there is no mean to report.
pub fn calculate_average(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return f64::NAN;
    }

    numbers.iter().sum::<f64>() / numbers.len() as f64
}

/// Classic FizzBuzz for a single number.
///
/// ## Rules
/// ```text
/// n % 15 == 0  → "FizzBuzz"
/// n % 3  == 0  → "Fizz"
/// n % 5  == 0  → "Buzz"
/// otherwise    → n as decimal
/// ```
pub fn fizz_buzz(n: i64) -> String {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => "FizzBuzz".to_string(),
        (true, false) => "Fizz".to_string(),
        (false, true) => "Buzz".to_string(),
        (false, false) => n.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
