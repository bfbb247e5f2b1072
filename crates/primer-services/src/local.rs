//! # In-Process Collaborators
//!
//! Stand-ins for the external services, good enough to drive the
//! `storefront` binary without any network access. They log through
//! `tracing` instead of talking to a real provider.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use primer_core::{CreditCard, ShippingQuote};
use rand::Rng;
use tracing::{info, warn};

use crate::collaborators::{
    Analytics, ChargeReceipt, Clock, CodeGenerator, Collaborators, CurrencyRates, Mailer,
    PaymentGateway, ShippingQuotes,
};
use crate::error::ServiceResult;

/// Rates against USD.
const USD_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("AUD", 1.5),
    ("EUR", 0.92),
    ("GBP", 0.79),
];

/// Cost and days by destination.
const SHIPPING_TABLE: &[(&str, f64, u32)] = &[
    ("London", 10.0, 2),
    ("New York", 5.0, 1),
    ("Sydney", 25.0, 6),
];

// =============================================================================
// Currency
// =============================================================================

/// A fixed table of exchange rates, all quoted against USD.
pub struct FixedRates {
    per_usd: HashMap<String, f64>,
}

impl Default for FixedRates {
    fn default() -> Self {
        FixedRates {
            per_usd: USD_RATES
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        }
    }
}

impl CurrencyRates for FixedRates {
    /// Unknown currencies yield `f64::NAN`.
    fn exchange_rate(&self, from: &str, to: &str) -> f64 {
        match (self.per_usd.get(from), self.per_usd.get(to)) {
            (Some(from_rate), Some(to_rate)) => to_rate / from_rate,
            _ => {
                warn!(from = %from, to = %to, "No exchange rate");
                f64::NAN
            }
        }
    }
}

// =============================================================================
// Shipping
// =============================================================================

pub struct FlatRateShipping {
    quotes: HashMap<String, ShippingQuote>,
}

impl Default for FlatRateShipping {
    fn default() -> Self {
        FlatRateShipping {
            quotes: SHIPPING_TABLE
                .iter()
                .map(|(destination, cost, estimated_days)| {
                    (
                        destination.to_string(),
                        ShippingQuote {
                            cost: *cost,
                            estimated_days: *estimated_days,
                        },
                    )
                })
                .collect(),
        }
    }
}

impl ShippingQuotes for FlatRateShipping {
    fn quote(&self, destination: &str) -> Option<ShippingQuote> {
        self.quotes.get(destination).copied()
    }
}

// =============================================================================
// Analytics, Payment, Email
// =============================================================================

pub struct LoggingAnalytics;

#[async_trait]
impl Analytics for LoggingAnalytics {
    async fn track_page_view(&self, path: &str) -> ServiceResult<()> {
        info!(path = %path, "Page view");
        Ok(())
    }
}

/// Approves any positive amount and declines the rest.
pub struct SandboxPayment;

#[async_trait]
impl PaymentGateway for SandboxPayment {
    async fn charge(&self, card: &CreditCard, amount: f64) -> ServiceResult<ChargeReceipt> {
        let start = card.number.len().saturating_sub(4);
        let last_four = card.number.get(start..).unwrap_or_default();

        if amount > 0.0 {
            info!(card = %last_four, amount, "Sandbox charge approved");
            Ok(ChargeReceipt::success())
        } else {
            warn!(card = %last_four, amount, "Sandbox charge declined");
            Ok(ChargeReceipt::failed())
        }
    }
}

pub struct LoggingMailer;

#[async_trait]
impl Mailer for LoggingMailer {
    async fn send_email(&self, to: &str, body: &str) -> ServiceResult<()> {
        info!(to = %to, bytes = body.len(), "Email sent");
        Ok(())
    }
}

// =============================================================================
// Security and Clock
// =============================================================================

/// Six-digit codes from the thread-local RNG.
pub struct RandomCodes;

impl CodeGenerator for RandomCodes {
    fn generate_code(&self) -> u32 {
        rand::thread_rng().gen_range(100_000..1_000_000)
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Bundles every in-process collaborator.
pub fn collaborators() -> Collaborators {
    Collaborators {
        currency: Arc::new(FixedRates::default()),
        shipping: Arc::new(FlatRateShipping::default()),
        analytics: Arc::new(LoggingAnalytics),
        payment: Arc::new(SandboxPayment),
        mailer: Arc::new(LoggingMailer),
        security: Arc::new(RandomCodes),
        clock: Arc::new(SystemClock),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::ChargeStatus;

    #[test]
    fn test_fixed_rates_cross_rate() {
        let rates = FixedRates::default();
        assert_eq!(rates.exchange_rate("USD", "AUD"), 1.5);
        assert_eq!(rates.exchange_rate("AUD", "AUD"), 1.0);
        assert!(rates.exchange_rate("USD", "XYZ").is_nan());
    }

    #[test]
    fn test_flat_rate_shipping() {
        let shipping = FlatRateShipping::default();
        assert_eq!(
            shipping.quote("London"),
            Some(ShippingQuote {
                cost: 10.0,
                estimated_days: 2
            })
        );
        assert_eq!(shipping.quote("Atlantis"), None);
    }

    #[test]
    fn test_random_codes_have_six_digits() {
        for _ in 0..100 {
            let code = RandomCodes.generate_code();
            assert_eq!(code.to_string().len(), 6);
        }
    }

    #[tokio::test]
    async fn test_sandbox_payment_declines_non_positive() {
        let card = CreditCard::new("4111111111111111");

        let approved = SandboxPayment.charge(&card, 10.0).await.unwrap();
        assert_eq!(approved.status, ChargeStatus::Success);

        let declined = SandboxPayment.charge(&card, 0.0).await.unwrap();
        assert_eq!(declined.status, ChargeStatus::Failed);
    }
}
