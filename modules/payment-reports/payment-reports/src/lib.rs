//! Payment Reports Module
//!
//! Read-only reporting queries over users, their personal info, companies
//! and received payments, backed by SeaORM (SQLite or PostgreSQL).
//!
//! ## Public API
//!
//! The public API is defined in the `payment-reports-sdk` crate and re-exported here:
//! - `PaymentReportsClientV1` - reporting trait
//! - `User`, `Payment`, `CompanyAverage`, ... - report models
//! - `CompanyFilter` - optional-field filter for filtered reports
//! - `PaymentReportsError` - error types
//!
//! `PaymentReportsLocalClient::connect` builds a ready client from a
//! [`PaymentReportsConfig`].
#![forbid(unsafe_code)]

// === PUBLIC API (from SDK) ===
pub use payment_reports_sdk::{
    Birthday, Company, CompanyAverage, CompanyFilter, CompanyPaymentSum, CompanyUserCount,
    LastNamePaymentRange, PayerAverage, Payment, PaymentReportsClientV1, PaymentReportsError,
    PersonalInfo, User,
};

// === CONFIGURATION ===
pub mod config;
pub use config::{ConfigError, DatabaseConfig, PaymentReportsConfig};

// === LOCAL CLIENT ===
pub mod local_client;
pub use local_client::PaymentReportsLocalClient;

// === INTERNAL MODULES ===
// Exposed for integration tests and the CLI; only the SDK types are stable.
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
