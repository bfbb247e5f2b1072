//! # Facade Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PRIMER_OPEN_HOUR=9                                                 │
//! │     PRIMER_CLOSE_HOUR=17                                               │
//! │     PRIMER_BASE_CURRENCY=EUR                                           │
//! │                                                                         │
//! │  2. TOML Config File (--config <path>)                                 │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     open 8, close 20, base USD, home page "/home"                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [hours]
//! open = 8    # first hour the store is online
//! close = 20  # first hour the store is offline again
//!
//! [currency]
//! base = "USD"
//!
//! [pages]
//! home_path = "/home"
//!
//! [signup]
//! welcome_message = "Welcome aboard!"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

// =============================================================================
// Business Hours
// =============================================================================

/// Opening hours as a half-open range of wall-clock hours: `[open, close)`.
///
/// With the defaults the store is online from 08:00 up to but not
/// including 20:00, so 19:59 is online and 20:00 is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessHours {
    pub open: u32,
    pub close: u32,
}

impl BusinessHours {
    /// Returns true when `hour` falls inside `[open, close)`.
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.open && hour < self.close
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.open >= self.close || self.close > 24 {
            return Err(ConfigError::InvalidHours {
                open: self.open,
                close: self.close,
            });
        }
        Ok(())
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        BusinessHours { open: 8, close: 20 }
    }
}

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Currency prices are quoted in before conversion.
    pub base: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        CurrencyConfig {
            base: "USD".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Path reported to analytics when the home page renders.
    pub home_path: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            home_path: "/home".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupConfig {
    /// Regular expression a sign-up email must match.
    pub email_pattern: String,

    /// Body of the email sent after a successful sign-up.
    pub welcome_message: String,
}

impl Default for SignupConfig {
    fn default() -> Self {
        SignupConfig {
            email_pattern: r"^[^\s@]+@[^\s@]+\.[^\s@]+$".to_string(),
            welcome_message: "Welcome aboard!".to_string(),
        }
    }
}

// =============================================================================
// Facade Configuration
// =============================================================================

/// Everything the facade reads at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacadeConfig {
    pub hours: BusinessHours,
    pub currency: CurrencyConfig,
    pub pages: PageConfig,
    pub signup: SignupConfig,
}

impl FacadeConfig {
    /// Loads configuration: defaults, then `path` (if any), then environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                info!(path = %path.display(), "Loading facade config");
                let contents =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                        path: path.to_path_buf(),
                        source,
                    })?;
                toml::from_str(&contents)?
            }
            None => {
                debug!("No config file given, using defaults");
                FacadeConfig::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: FacadeConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `PRIMER_*` overrides looked up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(open) = lookup("PRIMER_OPEN_HOUR") {
            self.hours.open = parse_hour("PRIMER_OPEN_HOUR", &open)?;
        }
        if let Some(close) = lookup("PRIMER_CLOSE_HOUR") {
            self.hours.close = parse_hour("PRIMER_CLOSE_HOUR", &close)?;
        }
        if let Some(base) = lookup("PRIMER_BASE_CURRENCY") {
            debug!(base = %base, "Overriding base currency from environment");
            self.currency.base = base;
        }
        Ok(())
    }

    /// Checks cross-field rules that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hours.validate()?;

        if self.currency.base.trim().is_empty() {
            return Err(ConfigError::InvalidValue("currency.base".to_string()));
        }
        if !self.pages.home_path.starts_with('/') {
            return Err(ConfigError::InvalidValue("pages.home_path".to_string()));
        }
        Ok(())
    }
}

fn parse_hour(key: &str, value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(key.to_string()))
}

// =============================================================================
// Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Opening hours must satisfy open < close <= 24, got open={open} close={close}")]
    InvalidHours { open: u32, close: u32 },

    #[error("Invalid email pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = FacadeConfig::default();
        assert_eq!(config.hours, BusinessHours { open: 8, close: 20 });
        assert_eq!(config.currency.base, "USD");
        assert_eq!(config.pages.home_path, "/home");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_hours_are_half_open() {
        let hours = BusinessHours::default();
        assert!(!hours.contains(7));
        assert!(hours.contains(8));
        assert!(hours.contains(19));
        assert!(!hours.contains(20));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = FacadeConfig::from_toml_str(
            r#"
            [hours]
            open = 9
            "#,
        )
        .unwrap();

        assert_eq!(config.hours.open, 9);
        assert_eq!(config.hours.close, 20);
        assert_eq!(config.signup.welcome_message, "Welcome aboard!");
    }

    #[test]
    fn test_rejects_inverted_hours() {
        let err = FacadeConfig::from_toml_str(
            r#"
            [hours]
            open = 20
            close = 8
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidHours { open: 20, close: 8 }));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = FacadeConfig::from_toml_str("[hours\nopen = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("PRIMER_OPEN_HOUR", "9"),
            ("PRIMER_CLOSE_HOUR", " 17 "),
            ("PRIMER_BASE_CURRENCY", "EUR"),
        ]
        .into_iter()
        .collect();

        let mut config = FacadeConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.hours, BusinessHours { open: 9, close: 17 });
        assert_eq!(config.currency.base, "EUR");
    }

    #[test]
    fn test_env_override_rejects_garbage() {
        let mut config = FacadeConfig::default();
        let err = config
            .apply_overrides(|key| (key == "PRIMER_OPEN_HOUR").then(|| "eight".to_string()))
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue(key) if key == "PRIMER_OPEN_HOUR"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = FacadeConfig::load(Some(Path::new("/nonexistent/primer.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
