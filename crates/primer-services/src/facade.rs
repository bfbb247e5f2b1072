//! # Service Facade
//!
//! Thin operations that call one collaborator each and shape the answer.
//!
//! ## Operation Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         ServiceFacade                                   │
//! │                                                                         │
//! │  get_price_in_currency ──► CurrencyRates   price × rate                │
//! │  get_shipping_info ──────► ShippingQuotes  "Shipping Cost: $10 (2 Days)"│
//! │  render_page ────────────► Analytics       page view for home path     │
//! │  submit_order ───────────► PaymentGateway  {success} / payment_error   │
//! │  sign_up ────────────────► Mailer          welcome email               │
//! │  login ──────────► CodeGenerator + Mailer  one-time code by email      │
//! │  is_online ──────────────► Clock           hour in [open, close)       │
//! │                                                                         │
//! │  sync: currency, shipping, is_online                                   │
//! │  async: render_page, submit_order, sign_up, login                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Timelike;
use primer_core::{CreditCard, Order};
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::collaborators::{ChargeStatus, Collaborators};
use crate::config::{ConfigError, FacadeConfig};
use crate::error::ServiceResult;

/// Error code reported when the payment service declines a charge.
pub const PAYMENT_ERROR: &str = "payment_error";

/// Markup returned by [`ServiceFacade::render_page`].
pub const PAGE_CONTENT: &str = "<div>content</div>";

// =============================================================================
// Order Outcome
// =============================================================================

/// Result of [`ServiceFacade::submit_order`].
///
/// Serializes as `{"success":true}` or
/// `{"success":false,"error":"payment_error"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OrderOutcome {
    pub fn succeeded() -> Self {
        OrderOutcome {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        OrderOutcome {
            success: false,
            error: Some(error.into()),
        }
    }
}

// =============================================================================
// Facade
// =============================================================================

pub struct ServiceFacade {
    collaborators: Collaborators,
    config: FacadeConfig,
    email_pattern: Regex,
}

impl ServiceFacade {
    /// Builds a facade over `collaborators`.
    ///
    /// ## Errors
    /// - [`ConfigError::InvalidPattern`] if the sign-up email pattern does not compile
    /// - any error from [`FacadeConfig::validate`]
    pub fn new(collaborators: Collaborators, config: FacadeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let email_pattern = Regex::new(&config.signup.email_pattern)?;

        Ok(ServiceFacade {
            collaborators,
            config,
            email_pattern,
        })
    }

    /// Configuration the facade was built with.
    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }

    /// Converts `price` from the base currency into `currency`.
    pub fn get_price_in_currency(&self, price: f64, currency: &str) -> f64 {
        let base = &self.config.currency.base;
        let rate = self.collaborators.currency.exchange_rate(base, currency);
        debug!(base = %base, currency = %currency, rate, "Converting price");
        price * rate
    }

    /// Describes shipping to `destination`, or says it is unavailable.
    pub fn get_shipping_info(&self, destination: &str) -> String {
        match self.collaborators.shipping.quote(destination) {
            Some(quote) => format!(
                "Shipping Cost: ${} ({} Days)",
                quote.cost, quote.estimated_days
            ),
            None => {
                debug!(destination = %destination, "No shipping quote");
                "Shipping Unavailable".to_string()
            }
        }
    }

    /// Renders the home page and records a page view for it.
    pub async fn render_page(&self) -> ServiceResult<String> {
        self.collaborators
            .analytics
            .track_page_view(&self.config.pages.home_path)
            .await?;

        Ok(PAGE_CONTENT.to_string())
    }

    /// Charges `card` for the order total.
    ///
    /// ## Flow
    /// ```text
    /// charge(card, order.total_amount())
    ///      │
    ///      ├── Err(..)          → propagated to caller
    ///      ├── status: success  → { success: true }
    ///      └── status: failed   → { success: false, error: "payment_error" }
    /// ```
    pub async fn submit_order(
        &self,
        order: &Order,
        card: &CreditCard,
    ) -> ServiceResult<OrderOutcome> {
        let receipt = self
            .collaborators
            .payment
            .charge(card, order.total_amount())
            .await?;

        match receipt.status {
            ChargeStatus::Success => {
                info!(amount = order.total_amount(), "Order charged");
                Ok(OrderOutcome::succeeded())
            }
            ChargeStatus::Failed => {
                warn!(amount = order.total_amount(), "Charge declined");
                Ok(OrderOutcome::failed(PAYMENT_ERROR))
            }
        }
    }

    /// Signs up `email` and sends the welcome message.
    ///
    /// Returns `false` without contacting the mailer if `email` does not
    /// look like an address.
    pub async fn sign_up(&self, email: &str) -> ServiceResult<bool> {
        if !self.email_pattern.is_match(email) {
            debug!(email = %email, "Rejected sign-up email");
            return Ok(false);
        }

        self.collaborators
            .mailer
            .send_email(email, &self.config.signup.welcome_message)
            .await?;

        info!(email = %email, "Welcome email sent");
        Ok(true)
    }

    /// Emails a fresh one-time login code to `email`.
    pub async fn login(&self, email: &str) -> ServiceResult<()> {
        let code = self.collaborators.security.generate_code();
        self.collaborators
            .mailer
            .send_email(email, &code.to_string())
            .await?;

        info!(email = %email, "Login code sent");
        Ok(())
    }

    /// True while the clock's current hour is inside the configured
    /// business hours (half-open, see [`crate::config::BusinessHours`]).
    pub fn is_online(&self) -> bool {
        let hour = self.collaborators.clock.now().hour();
        self.config.hours.contains(hour)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
