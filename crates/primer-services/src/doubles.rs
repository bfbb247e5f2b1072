//! Test doubles for the collaborator traits.
//!
//! Spies record every call behind a `Mutex` so a test can assert on the
//! arguments afterwards. [`collaborators`] returns a bundle of inert doubles;
//! tests replace the one they care about with struct update syntax.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use primer_core::{CreditCard, ShippingQuote};

use crate::collaborators::{
    Analytics, ChargeReceipt, Clock, CodeGenerator, Collaborators, CurrencyRates, Mailer,
    PaymentGateway, ShippingQuotes,
};
use crate::error::{ServiceError, ServiceResult};

/// Returns one rate for every pair and remembers what was asked.
pub struct FixedRate {
    rate: f64,
    lookups: Mutex<Vec<(String, String)>>,
}

impl FixedRate {
    pub fn new(rate: f64) -> Self {
        FixedRate {
            rate,
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn lookups(&self) -> Vec<(String, String)> {
        self.lookups.lock().unwrap().clone()
    }
}

impl CurrencyRates for FixedRate {
    fn exchange_rate(&self, from: &str, to: &str) -> f64 {
        self.lookups
            .lock()
            .unwrap()
            .push((from.to_string(), to.to_string()));
        self.rate
    }
}

pub struct StubShipping(pub Option<ShippingQuote>);

impl ShippingQuotes for StubShipping {
    fn quote(&self, _destination: &str) -> Option<ShippingQuote> {
        self.0
    }
}

#[derive(Default)]
pub struct AnalyticsSpy {
    paths: Mutex<Vec<String>>,
}

impl AnalyticsSpy {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

#[async_trait]
impl Analytics for AnalyticsSpy {
    async fn track_page_view(&self, path: &str) -> ServiceResult<()> {
        self.paths.lock().unwrap().push(path.to_string());
        Ok(())
    }
}

pub struct FailingAnalytics;

#[async_trait]
impl Analytics for FailingAnalytics {
    async fn track_page_view(&self, _path: &str) -> ServiceResult<()> {
        Err(ServiceError::Analytics("collector offline".to_string()))
    }
}

/// Approves every charge.
pub struct ApprovingPayment;

#[async_trait]
impl PaymentGateway for ApprovingPayment {
    async fn charge(&self, _card: &CreditCard, _amount: f64) -> ServiceResult<ChargeReceipt> {
        Ok(ChargeReceipt::success())
    }
}

#[derive(Default)]
pub struct MailerSpy {
    sent: Mutex<Vec<(String, String)>>,
}

impl MailerSpy {
    /// Every `(to, body)` pair sent so far.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for MailerSpy {
    async fn send_email(&self, to: &str, body: &str) -> ServiceResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        Ok(())
    }
}

pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send_email(&self, _to: &str, _body: &str) -> ServiceResult<()> {
        Err(ServiceError::Email("smtp unreachable".to_string()))
    }
}

/// Hands out `code` and records each issue.
pub struct CodeSpy {
    code: u32,
    issued: Mutex<Vec<u32>>,
}

impl CodeSpy {
    pub fn new(code: u32) -> Self {
        CodeSpy {
            code,
            issued: Mutex::new(Vec::new()),
        }
    }

    pub fn issued(&self) -> Vec<u32> {
        self.issued.lock().unwrap().clone()
    }
}

impl CodeGenerator for CodeSpy {
    fn generate_code(&self) -> u32 {
        self.issued.lock().unwrap().push(self.code);
        self.code
    }
}

/// A clock frozen at `hour:minute` on 2024-01-01.
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn at(hour: u32, minute: u32) -> Self {
        let time = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .unwrap();
        FixedClock(time)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub fn collaborators() -> Collaborators {
    Collaborators {
        currency: Arc::new(FixedRate::new(1.0)),
        shipping: Arc::new(StubShipping(None)),
        analytics: Arc::new(AnalyticsSpy::default()),
        payment: Arc::new(ApprovingPayment),
        mailer: Arc::new(MailerSpy::default()),
        security: Arc::new(CodeSpy::new(123_456)),
        clock: Arc::new(FixedClock::at(12, 0)),
    }
}
