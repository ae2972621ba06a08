//! Payment Reports SDK
//!
//! This crate provides the public API for the `payment-reports` module:
//! - `PaymentReportsClientV1` trait
//! - Report models (`User`, `Payment`, `CompanyAverage`, ...)
//! - `CompanyFilter` for filtered reports
//! - Error type (`PaymentReportsError`)
//!
//! ## Usage
//!
//! ```ignore
//! use payment_reports_sdk::{CompanyFilter, PaymentReportsClientV1};
//!
//! let users = client.list_users_by_company_name("Google").await?;
//! let filter = CompanyFilter::builder().name("Google").build();
//! let birthdays = client.birthdays_by_company_filter(&filter).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client;
pub mod errors;
pub mod filter;
pub mod models;

pub use client::PaymentReportsClientV1;
pub use errors::PaymentReportsError;
pub use filter::{CompanyFilter, CompanyFilterBuilder};
pub use models::{
    Birthday, Company, CompanyAverage, CompanyPaymentSum, CompanyUserCount, LastNamePaymentRange,
    PayerAverage, Payment, PersonalInfo, User,
};
