//! Object-safe client boundary for the `payment-reports` module.
//!
//! Implementations own (or borrow) the database connection; callers only see
//! report models and [`PaymentReportsError`].

use async_trait::async_trait;

use crate::errors::PaymentReportsError;
use crate::filter::CompanyFilter;
use crate::models::{
    Birthday, CompanyAverage, CompanyPaymentSum, CompanyUserCount, LastNamePaymentRange,
    PayerAverage, Payment, User,
};

/// Read-only reporting API over users, companies and payments.
#[async_trait]
pub trait PaymentReportsClientV1: Send + Sync {
    // ==================== User listings ====================

    /// All users, in store order.
    async fn list_all_users(&self) -> Result<Vec<User>, PaymentReportsError>;

    /// Users whose first name equals `first_name` (case-sensitive).
    async fn list_users_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Vec<User>, PaymentReportsError>;

    /// The `limit` oldest users, ascending by birth date.
    ///
    /// Fails with `InvalidArgument` when `limit` is not positive.
    async fn list_users_ordered_by_birthday(
        &self,
        limit: i64,
    ) -> Result<Vec<User>, PaymentReportsError>;

    /// Users employed by the company named `company_name`.
    async fn list_users_by_company_name(
        &self,
        company_name: &str,
    ) -> Result<Vec<User>, PaymentReportsError>;

    // ==================== Payment reports ====================

    /// Payments received by users of `company_name`, ordered by receiver
    /// username and then by amount.
    async fn list_payments_by_company_name(
        &self,
        company_name: &str,
    ) -> Result<Vec<Payment>, PaymentReportsError>;

    /// Mean payment of the user with the given names.
    ///
    /// Fails with `NoData` when the user received no payments.
    async fn average_payment_amount(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<f64, PaymentReportsError>;

    /// Mean payment per company, ordered by company name.
    async fn company_averages(&self) -> Result<Vec<CompanyAverage>, PaymentReportsError>;

    /// Users whose mean payment exceeds the mean of all payments, ordered by
    /// username.
    async fn above_average_payers(&self) -> Result<Vec<PayerAverage>, PaymentReportsError>;

    /// Largest and smallest payment per last name.
    async fn min_max_payments_by_last_name(
        &self,
    ) -> Result<Vec<LastNamePaymentRange>, PaymentReportsError>;

    /// Longest `lastname + firstname` across all users.
    async fn max_full_name_length(&self) -> Result<i32, PaymentReportsError>;

    /// Birth dates of users matching `filter`.
    async fn birthdays_by_company_filter(
        &self,
        filter: &CompanyFilter,
    ) -> Result<Vec<Birthday>, PaymentReportsError>;

    // ==================== Company aggregates ====================

    /// Number of users per company, ordered by company name.
    async fn user_count_by_company(&self) -> Result<Vec<CompanyUserCount>, PaymentReportsError>;

    /// Sum of payments per company, ordered by company name.
    async fn payment_sum_by_company(&self)
    -> Result<Vec<CompanyPaymentSum>, PaymentReportsError>;
}
