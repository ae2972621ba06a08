use async_trait::async_trait;
use payment_reports_sdk::{
    Birthday, CompanyFilter, CompanyUserCount, LastNamePaymentRange, Payment, User,
};
use sea_orm::ConnectionTrait;

use crate::domain::aggregates::{CompanyPaymentTotals, PaymentTotals, UserPaymentTotals};
use crate::domain::error::DomainError;

/// Read-only persistence port for the reporting service.
///
/// Every method takes the connection to run on, so the same repository can
/// serve a pooled `DatabaseConnection` or an open `DatabaseTransaction`.
/// Implementations return rows already mapped to SDK or aggregate types and
/// never compute means themselves.
#[async_trait]
pub trait ReportsRepository: Send + Sync {
    /// All users.
    async fn all_users<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<User>, DomainError>;

    /// Users with the exact first name.
    async fn users_by_first_name<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        first_name: &str,
    ) -> Result<Vec<User>, DomainError>;

    /// First `limit` users ascending by birth date.
    async fn users_ordered_by_birthday<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        limit: u64,
    ) -> Result<Vec<User>, DomainError>;

    /// Users of the named company.
    async fn users_by_company_name<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        company_name: &str,
    ) -> Result<Vec<User>, DomainError>;

    /// Payments to users of the named company, ordered by receiver username
    /// then amount.
    async fn payments_by_company_name<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        company_name: &str,
    ) -> Result<Vec<Payment>, DomainError>;

    /// Totals over every payment in the store.
    async fn payment_totals<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<PaymentTotals, DomainError>;

    /// Totals over payments received by users with both names.
    async fn payment_totals_by_full_name<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        first_name: &str,
        last_name: &str,
    ) -> Result<PaymentTotals, DomainError>;

    /// Totals per company with at least one payment, ordered by company name.
    async fn company_payment_totals<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<CompanyPaymentTotals>, DomainError>;

    /// Users whose own payment mean strictly exceeds the mean of `threshold`,
    /// ordered by username.
    async fn users_with_mean_above<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        threshold: PaymentTotals,
    ) -> Result<Vec<UserPaymentTotals>, DomainError>;

    /// Max and min payment per last name, ordered by last name.
    async fn payment_range_by_last_name<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<LastNamePaymentRange>, DomainError>;

    /// Longest `lastname + firstname`, `None` when there are no users.
    async fn max_full_name_length<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Option<i32>, DomainError>;

    /// Birth dates of users matching `filter`.
    async fn birthdays<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        filter: &CompanyFilter,
    ) -> Result<Vec<Birthday>, DomainError>;

    /// Users per company, ordered by company name.
    async fn user_count_by_company<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<CompanyUserCount>, DomainError>;
}
