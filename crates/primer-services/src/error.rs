//! # Service Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Service Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Collaborator   │  │  Configuration  │  │  Business outcome       │ │
//! │  │                 │  │                 │  │  (NOT an error)         │ │
//! │  │  Payment        │  │  Config         │  │                         │ │
//! │  │  Email          │  │  (ConfigError)  │  │  declined charge →      │ │
//! │  │  Analytics      │  │                 │  │  OrderOutcome::failed   │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A collaborator that answers "no" (a declined card) is a normal result.
//! A collaborator that cannot answer at all surfaces as one of these.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for facade operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The payment service could not process the charge request.
    #[error("Payment service error: {0}")]
    Payment(String),

    /// The email service did not accept the message.
    #[error("Email delivery failed: {0}")]
    Email(String),

    /// The analytics service rejected the event.
    #[error("Analytics tracking failed: {0}")]
    Analytics(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ServiceError::Email("mailbox full".to_string());
        assert_eq!(err.to_string(), "Email delivery failed: mailbox full");
    }

    #[test]
    fn test_config_error_converts() {
        let err: ServiceError = ConfigError::InvalidHours { open: 20, close: 8 }.into();
        assert!(matches!(err, ServiceError::Config(_)));
    }
}
