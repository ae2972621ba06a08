//! Domain service layer - argument rules and report assembly.
//!
//! The service is stateless apart from its configuration. Every operation
//! borrows the connection it runs on, performs at most a couple of read
//! queries through the repository and returns a fully materialized result.
//! Repository failures are re-tagged with the public operation name; nothing
//! is retried.

use std::num::NonZeroU64;
use std::sync::Arc;

use payment_reports_sdk::{
    Birthday, CompanyAverage, CompanyFilter, CompanyPaymentSum, CompanyUserCount,
    LastNamePaymentRange, PayerAverage, Payment, User,
};
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::repos::ReportsRepository;

/// Configuration for the domain service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Upper bound for `list_users_ordered_by_birthday`. Larger limits are
    /// clamped to it.
    pub max_birthday_limit: Option<NonZeroU64>,
}

pub struct ReportsService<R: ReportsRepository> {
    repo: Arc<R>,
    config: ServiceConfig,
}

impl<R: ReportsRepository> Clone for ReportsService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: self.config.clone(),
        }
    }
}

impl<R: ReportsRepository> ReportsService<R> {
    #[must_use]
    pub fn new(repo: Arc<R>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    #[tracing::instrument(name = "payment_reports.list_all_users", skip_all)]
    pub async fn list_all_users<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<User>, DomainError> {
        tracing::debug!("Listing all users");
        let users = self
            .repo
            .all_users(conn)
            .await
            .map_err(|e| e.in_operation("list_all_users"))?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    #[tracing::instrument(name = "payment_reports.list_users_by_first_name", skip(self, conn))]
    pub async fn list_users_by_first_name<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        first_name: &str,
    ) -> Result<Vec<User>, DomainError> {
        let users = self
            .repo
            .users_by_first_name(conn, first_name)
            .await
            .map_err(|e| e.in_operation("list_users_by_first_name"))?;
        tracing::debug!(count = users.len(), "Listed users by first name");
        Ok(users)
    }

    #[tracing::instrument(name = "payment_reports.list_users_ordered_by_birthday", skip(self, conn))]
    pub async fn list_users_ordered_by_birthday<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        limit: i64,
    ) -> Result<Vec<User>, DomainError> {
        let limit = self.birthday_limit(limit)?;
        let users = self
            .repo
            .users_ordered_by_birthday(conn, limit)
            .await
            .map_err(|e| e.in_operation("list_users_ordered_by_birthday"))?;
        tracing::debug!(count = users.len(), limit, "Listed users by birthday");
        Ok(users)
    }

    #[tracing::instrument(name = "payment_reports.list_users_by_company_name", skip(self, conn))]
    pub async fn list_users_by_company_name<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        company_name: &str,
    ) -> Result<Vec<User>, DomainError> {
        let users = self
            .repo
            .users_by_company_name(conn, company_name)
            .await
            .map_err(|e| e.in_operation("list_users_by_company_name"))?;
        tracing::debug!(count = users.len(), "Listed users by company");
        Ok(users)
    }

    #[tracing::instrument(name = "payment_reports.list_payments_by_company_name", skip(self, conn))]
    pub async fn list_payments_by_company_name<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        company_name: &str,
    ) -> Result<Vec<Payment>, DomainError> {
        let payments = self
            .repo
            .payments_by_company_name(conn, company_name)
            .await
            .map_err(|e| e.in_operation("list_payments_by_company_name"))?;
        tracing::debug!(count = payments.len(), "Listed payments by company");
        Ok(payments)
    }

    #[tracing::instrument(name = "payment_reports.average_payment_amount", skip(self, conn))]
    pub async fn average_payment_amount<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        first_name: &str,
        last_name: &str,
    ) -> Result<f64, DomainError> {
        let totals = self
            .repo
            .payment_totals_by_full_name(conn, first_name, last_name)
            .await
            .map_err(|e| e.in_operation("average_payment_amount"))?;

        totals.mean().ok_or_else(|| {
            tracing::warn!("No payments found for user");
            DomainError::no_data("average_payment_amount")
        })
    }

    #[tracing::instrument(name = "payment_reports.company_averages", skip_all)]
    pub async fn company_averages<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<CompanyAverage>, DomainError> {
        let rows = self
            .repo
            .company_payment_totals(conn)
            .await
            .map_err(|e| e.in_operation("company_averages"))?;

        let averages: Vec<CompanyAverage> = rows
            .into_iter()
            .filter_map(|row| {
                row.totals.mean().map(|average_amount| CompanyAverage {
                    company_name: row.company_name,
                    average_amount,
                })
            })
            .collect();
        tracing::debug!(count = averages.len(), "Computed company averages");
        Ok(averages)
    }

    #[tracing::instrument(name = "payment_reports.above_average_payers", skip_all)]
    pub async fn above_average_payers<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<PayerAverage>, DomainError> {
        let global = self
            .repo
            .payment_totals(conn)
            .await
            .map_err(|e| e.in_operation("above_average_payers"))?;
        if global.is_empty() {
            tracing::debug!("No payments in store, nobody is above average");
            return Ok(Vec::new());
        }

        let rows = self
            .repo
            .users_with_mean_above(conn, global)
            .await
            .map_err(|e| e.in_operation("above_average_payers"))?;

        let payers: Vec<PayerAverage> = rows
            .into_iter()
            .filter_map(|row| {
                row.totals.mean().map(|average_amount| PayerAverage {
                    user: row.user,
                    average_amount,
                })
            })
            .collect();
        tracing::debug!(
            count = payers.len(),
            global_mean = global.mean(),
            "Found above-average payers"
        );
        Ok(payers)
    }

    #[tracing::instrument(name = "payment_reports.min_max_payments_by_last_name", skip_all)]
    pub async fn min_max_payments_by_last_name<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<LastNamePaymentRange>, DomainError> {
        self.repo
            .payment_range_by_last_name(conn)
            .await
            .map_err(|e| e.in_operation("min_max_payments_by_last_name"))
    }

    #[tracing::instrument(name = "payment_reports.max_full_name_length", skip_all)]
    pub async fn max_full_name_length<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<i32, DomainError> {
        self.repo
            .max_full_name_length(conn)
            .await
            .map_err(|e| e.in_operation("max_full_name_length"))?
            .ok_or_else(|| {
                tracing::warn!("No users in store");
                DomainError::no_data("max_full_name_length")
            })
    }

    #[tracing::instrument(name = "payment_reports.birthdays_by_company_filter", skip(self, conn))]
    pub async fn birthdays_by_company_filter<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        filter: &CompanyFilter,
    ) -> Result<Vec<Birthday>, DomainError> {
        let birthdays = self
            .repo
            .birthdays(conn, filter)
            .await
            .map_err(|e| e.in_operation("birthdays_by_company_filter"))?;
        tracing::debug!(count = birthdays.len(), "Listed birthdays");
        Ok(birthdays)
    }

    #[tracing::instrument(name = "payment_reports.user_count_by_company", skip_all)]
    pub async fn user_count_by_company<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<CompanyUserCount>, DomainError> {
        self.repo
            .user_count_by_company(conn)
            .await
            .map_err(|e| e.in_operation("user_count_by_company"))
    }

    #[tracing::instrument(name = "payment_reports.payment_sum_by_company", skip_all)]
    pub async fn payment_sum_by_company<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<CompanyPaymentSum>, DomainError> {
        let rows = self
            .repo
            .company_payment_totals(conn)
            .await
            .map_err(|e| e.in_operation("payment_sum_by_company"))?;

        Ok(rows
            .into_iter()
            .map(|row| CompanyPaymentSum {
                company_name: row.company_name,
                total_amount: row.totals.amount_sum,
            })
            .collect())
    }

    /// Validate a requested limit and apply the configured cap.
    fn birthday_limit(&self, limit: i64) -> Result<u64, DomainError> {
        let requested = match u64::try_from(limit) {
            Ok(n) if n > 0 => n,
            _ => {
                tracing::warn!(limit, "Rejected non-positive limit");
                return Err(DomainError::invalid_argument(
                    "limit",
                    format!("must be positive, got {limit}"),
                ));
            }
        };

        Ok(self
            .config
            .max_birthday_limit
            .map_or(requested, |max| requested.min(max.get())))
    }
}
