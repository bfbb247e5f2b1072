//! # Domain Types
//!
//! Data shared between the pure helpers and the service facade.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │   CreditCard    │   │ ShippingQuote   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  total_amount   │   │  number         │   │  cost           │       │
//! │  │                 │   │  (opaque)       │   │  estimated_days │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  All transient and caller-owned; nothing here outlives one call.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Order
// =============================================================================

/// An order waiting to be paid.
///
/// The total is checked on construction and on deserialization, so an
/// `Order` in hand always has a non-negative amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "OrderData")]
pub struct Order {
    total_amount: f64,
}

impl Order {
    /// Creates an order for `total_amount`.
    ///
    /// ## Errors
    /// [`ValidationError::MustNotBeNegative`] if the amount is negative or NaN.
    pub fn new(total_amount: f64) -> Result<Self, ValidationError> {
        if total_amount.is_nan() || total_amount < 0.0 {
            return Err(ValidationError::MustNotBeNegative {
                field: "totalAmount".to_string(),
            });
        }
        Ok(Order { total_amount })
    }

    /// Amount to charge.
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }
}

/// Unchecked wire form of [`Order`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderData {
    total_amount: f64,
}

impl TryFrom<OrderData> for Order {
    type Error = ValidationError;

    fn try_from(data: OrderData) -> Result<Self, Self::Error> {
        Order::new(data.total_amount)
    }
}

// =============================================================================
// Credit Card
// =============================================================================

/// Opaque card reference handed straight to the payment service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub number: String,
}

impl CreditCard {
    pub fn new(number: impl Into<String>) -> Self {
        CreditCard {
            number: number.into(),
        }
    }
}

// =============================================================================
// Shipping Quote
// =============================================================================

/// A carrier's price and delivery estimate for one destination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuote {
    pub cost: f64,
    pub estimated_days: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_json_shape() {
        let order: Order = serde_json::from_str(r#"{"totalAmount": 100}"#).unwrap();
        assert_eq!(order, Order::new(100.0).unwrap());

        let json = serde_json::to_value(order).unwrap();
        assert_eq!(json, serde_json::json!({ "totalAmount": 100.0 }));
    }

    #[test]
    fn test_order_allows_zero_total() {
        assert_eq!(Order::new(0.0).unwrap().total_amount(), 0.0);
    }

    #[test]
    fn test_order_rejects_negative_total() {
        let err = Order::new(-50.0).unwrap_err();
        assert!(matches!(err, ValidationError::MustNotBeNegative { .. }));
        assert!(Order::new(f64::NAN).is_err());
    }

    #[test]
    fn test_order_json_rejects_negative_total() {
        let result = serde_json::from_str::<Order>(r#"{"totalAmount": -50}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid totalAmount"), "{err}");
    }

    #[test]
    fn test_shipping_quote_json_shape() {
        let quote = ShippingQuote {
            cost: 10.0,
            estimated_days: 2,
        };
        let json = serde_json::to_value(quote).unwrap();
        assert_eq!(json, serde_json::json!({ "cost": 10.0, "estimatedDays": 2 }));
    }
}
