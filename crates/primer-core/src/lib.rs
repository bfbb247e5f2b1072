//! # primer-core: Pure Logic for Primer
//!
//! Small, deterministic helpers with zero I/O dependencies. Everything that
//! talks to the outside world lives in `primer-services`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Primer Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               primer-services (ServiceFacade)                   │   │
//! │  │   currency • shipping • analytics • payment • email • clock    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ uses types                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ primer-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌────────────┐  ┌─────────────┐    │   │
//! │  │   │  stack  │  │ numeric │  │ validation │  │   pricing   │    │   │
//! │  │   │  LIFO   │  │ max     │  │ price      │  │   coupons   │    │   │
//! │  │   │         │  │ fizz    │  │ username   │  │   discount  │    │   │
//! │  │   └─────────┘  └─────────┘  └────────────┘  └─────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`stack`] - LIFO container with explicit empty errors
//! - [`numeric`] - max, factorial, average, FizzBuzz
//! - [`validation`] - price range, username, driving age, user input
//! - [`pricing`] - coupon catalog and discount calculation
//! - [`types`] - shared data types (Order, CreditCard, ShippingQuote)
//! - [`error`] - domain error types
//!
//! ## Two Ways To Fail
//!
//! 1. **Signaled**: [`Stack::pop`] and [`numeric::factorial`] return
//!    `Err(CoreError)` and the caller must handle it.
//! 2. **Verdict values**: validators and the discount calculator return an
//!    enum whose failure variants render a message containing "Invalid".
//!
//! ## Example Usage
//!
//! ```rust
//! use primer_core::pricing::discounted_price;
//! use primer_core::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(4);
//! stack.push(5);
//! assert_eq!(stack.pop().unwrap(), 5);
//!
//! assert_eq!(discounted_price(10.0, "SAVE10").unwrap(), 9.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod numeric;
pub mod pricing;
pub mod stack;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use stack::Stack;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Shortest username accepted by [`validation::is_valid_username`].
pub const USERNAME_MIN_LEN: usize = 5;

/// Longest username accepted by [`validation::is_valid_username`].
pub const USERNAME_MAX_LEN: usize = 15;

// Sign-up form bounds used by `validation::validate_user_input`. Looser on
// username length than the rule above, but the user must be an adult.

/// Shortest username on the sign-up form.
pub const SIGNUP_USERNAME_MIN_LEN: usize = 3;
/// Longest username on the sign-up form.
pub const SIGNUP_USERNAME_MAX_LEN: usize = 255;
/// Youngest age accepted at sign-up.
pub const SIGNUP_MIN_AGE: f64 = 18.0;
/// Oldest age accepted at sign-up.
pub const SIGNUP_MAX_AGE: f64 = 100.0;
