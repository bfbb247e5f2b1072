//! # primer-services: Service Facade for Primer
//!
//! Operations that depend on outside services: currency conversion,
//! shipping quotes, page analytics, payments, email and the business-hours
//! clock. Each service is a trait in [`collaborators`], injected into
//! [`ServiceFacade`] so tests can swap in doubles.
//!
//! ## Wiring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   FacadeConfig::load(path) ──┐                                          │
//! │                              ▼                                          │
//! │   local::collaborators() ──► ServiceFacade::new(collaborators, config)  │
//! │   (or test doubles)          │                                          │
//! │                              ▼                                          │
//! │                  facade.submit_order(&order, &card).await               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`collaborators`] - service traits and the `Collaborators` bundle
//! - [`config`] - TOML + environment configuration
//! - [`error`] - service error types
//! - [`facade`] - `ServiceFacade` operations
//! - [`fetch`] - simulated slow data source
//! - [`local`] - in-process collaborator implementations
//!
//! ## Usage
//! ```rust,no_run
//! use primer_core::{CreditCard, Order};
//! use primer_services::{local, FacadeConfig, ServiceFacade};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let facade = ServiceFacade::new(local::collaborators(), FacadeConfig::default())?;
//!
//! let outcome = facade
//!     .submit_order(&Order::new(100.0)?, &CreditCard::new("4111111111111111"))
//!     .await?;
//! assert!(outcome.success);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collaborators;
pub mod config;
pub mod error;
pub mod facade;
pub mod fetch;
pub mod local;

#[cfg(test)]
mod doubles;

// =============================================================================
// Re-exports
// =============================================================================

pub use collaborators::{
    Analytics, ChargeReceipt, ChargeStatus, Clock, CodeGenerator, Collaborators, CurrencyRates,
    Mailer, PaymentGateway, ShippingQuotes,
};
pub use config::{BusinessHours, ConfigError, FacadeConfig};
pub use error::{ServiceError, ServiceResult};
pub use facade::{OrderOutcome, ServiceFacade};
pub use fetch::fetch_data;
