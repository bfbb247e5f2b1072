//! # Collaborators
//!
//! Every external service the facade talks to, as a trait.
//!
//! ```text
//! ┌────────────────┬──────────────────────┬───────────────────────────────┐
//! │ Trait          │ Call                 │ Answer                        │
//! ├────────────────┼──────────────────────┼───────────────────────────────┤
//! │ CurrencyRates  │ exchange_rate(f, t)  │ f64 rate                      │
//! │ ShippingQuotes │ quote(destination)   │ Option<ShippingQuote>         │
//! │ Analytics      │ track_page_view(p)   │ async, ()                     │
//! │ PaymentGateway │ charge(card, amt)    │ async, ChargeReceipt          │
//! │ Mailer         │ send_email(to, body) │ async, ()                     │
//! │ CodeGenerator  │ generate_code()      │ u32                           │
//! │ Clock          │ now()                │ local NaiveDateTime           │
//! └────────────────┴──────────────────────┴───────────────────────────────┘
//! ```
//!
//! Implementations live in [`crate::local`] for the demo binary; tests
//! supply their own.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use primer_core::{CreditCard, ShippingQuote};
use serde::{Deserialize, Serialize};

use crate::error::ServiceResult;

// =============================================================================
// Payment Types
// =============================================================================

/// Only `"success"` counts as paid; any other status string decodes as
/// [`ChargeStatus::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Success,
    #[serde(other)]
    Failed,
}

/// What the payment service reports back for a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeReceipt {
    pub status: ChargeStatus,
}

impl ChargeReceipt {
    pub const fn success() -> Self {
        ChargeReceipt {
            status: ChargeStatus::Success,
        }
    }

    pub const fn failed() -> Self {
        ChargeReceipt {
            status: ChargeStatus::Failed,
        }
    }
}

// =============================================================================
// Traits
// =============================================================================

pub trait CurrencyRates: Send + Sync {
    /// Units of `to` per unit of `from`.
    fn exchange_rate(&self, from: &str, to: &str) -> f64;
}

pub trait ShippingQuotes: Send + Sync {
    /// `None` when no carrier serves `destination`.
    fn quote(&self, destination: &str) -> Option<ShippingQuote>;
}

#[async_trait]
pub trait Analytics: Send + Sync {
    async fn track_page_view(&self, path: &str) -> ServiceResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charges `amount` to `card`. A decline is `Ok` with a failed status.
    async fn charge(&self, card: &CreditCard, amount: f64) -> ServiceResult<ChargeReceipt>;
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_email(&self, to: &str, body: &str) -> ServiceResult<()>;
}

pub trait CodeGenerator: Send + Sync {
    /// A fresh one-time numeric code.
    fn generate_code(&self) -> u32;
}

pub trait Clock: Send + Sync {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

// =============================================================================
// Bundle
// =============================================================================

/// The full set of services handed to [`crate::ServiceFacade::new`].
#[derive(Clone)]
pub struct Collaborators {
    pub currency: Arc<dyn CurrencyRates>,
    pub shipping: Arc<dyn ShippingQuotes>,
    pub analytics: Arc<dyn Analytics>,
    pub payment: Arc<dyn PaymentGateway>,
    pub mailer: Arc<dyn Mailer>,
    pub security: Arc<dyn CodeGenerator>,
    pub clock: Arc<dyn Clock>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_receipt_json_shape() {
        let receipt: ChargeReceipt = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(receipt, ChargeReceipt::success());

        let json = serde_json::to_string(&ChargeReceipt::failed()).unwrap();
        assert_eq!(json, r#"{"status":"failed"}"#);
    }

    #[test]
    fn test_unrecognized_status_is_failed_charge() {
        for status in ["declined", "insufficient_funds", "SUCCESS"] {
            let json = format!(r#"{{"status":"{status}"}}"#);
            let receipt: ChargeReceipt = serde_json::from_str(&json).unwrap();
            assert_eq!(receipt, ChargeReceipt::failed(), "{status}");
        }
    }
}
