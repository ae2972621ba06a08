//! Local implementation of `PaymentReportsClientV1`.
//!
//! Owns the connection pool and delegates every call to the domain service,
//! converting domain errors into SDK error types.

use std::sync::Arc;

use async_trait::async_trait;
use payment_reports_sdk::{
    Birthday, CompanyAverage, CompanyFilter, CompanyPaymentSum, CompanyUserCount,
    LastNamePaymentRange, PayerAverage, Payment, PaymentReportsClientV1, PaymentReportsError, User,
};
use sea_orm::{DatabaseConnection, DbErr};

use crate::config::PaymentReportsConfig;
use crate::domain::service::ReportsService;
use crate::infra::storage::db;
use crate::infra::storage::OrmReportsRepository;

pub struct PaymentReportsLocalClient {
    db: DatabaseConnection,
    service: ReportsService<OrmReportsRepository>,
}

impl PaymentReportsLocalClient {
    /// Create a client over an existing connection.
    #[must_use]
    pub fn new(db: DatabaseConnection, service: ReportsService<OrmReportsRepository>) -> Self {
        Self { db, service }
    }

    /// Connect using `config.database` and build the service from
    /// `config.service`.
    ///
    /// # Errors
    /// Returns the driver error if the database is unreachable.
    pub async fn connect(config: &PaymentReportsConfig) -> Result<Self, DbErr> {
        let db = db::connect(&config.database).await?;
        let service = ReportsService::new(
            Arc::new(OrmReportsRepository::new()),
            config.service.clone(),
        );
        Ok(Self::new(db, service))
    }

    #[must_use]
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl PaymentReportsClientV1 for PaymentReportsLocalClient {
    async fn list_all_users(&self) -> Result<Vec<User>, PaymentReportsError> {
        self.service
            .list_all_users(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn list_users_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Vec<User>, PaymentReportsError> {
        self.service
            .list_users_by_first_name(&self.db, first_name)
            .await
            .map_err(Into::into)
    }

    async fn list_users_ordered_by_birthday(
        &self,
        limit: i64,
    ) -> Result<Vec<User>, PaymentReportsError> {
        self.service
            .list_users_ordered_by_birthday(&self.db, limit)
            .await
            .map_err(Into::into)
    }

    async fn list_users_by_company_name(
        &self,
        company_name: &str,
    ) -> Result<Vec<User>, PaymentReportsError> {
        self.service
            .list_users_by_company_name(&self.db, company_name)
            .await
            .map_err(Into::into)
    }

    async fn list_payments_by_company_name(
        &self,
        company_name: &str,
    ) -> Result<Vec<Payment>, PaymentReportsError> {
        self.service
            .list_payments_by_company_name(&self.db, company_name)
            .await
            .map_err(Into::into)
    }

    async fn average_payment_amount(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<f64, PaymentReportsError> {
        self.service
            .average_payment_amount(&self.db, first_name, last_name)
            .await
            .map_err(Into::into)
    }

    async fn company_averages(&self) -> Result<Vec<CompanyAverage>, PaymentReportsError> {
        self.service
            .company_averages(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn above_average_payers(&self) -> Result<Vec<PayerAverage>, PaymentReportsError> {
        self.service
            .above_average_payers(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn min_max_payments_by_last_name(
        &self,
    ) -> Result<Vec<LastNamePaymentRange>, PaymentReportsError> {
        self.service
            .min_max_payments_by_last_name(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn max_full_name_length(&self) -> Result<i32, PaymentReportsError> {
        self.service
            .max_full_name_length(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn birthdays_by_company_filter(
        &self,
        filter: &CompanyFilter,
    ) -> Result<Vec<Birthday>, PaymentReportsError> {
        self.service
            .birthdays_by_company_filter(&self.db, filter)
            .await
            .map_err(Into::into)
    }

    async fn user_count_by_company(&self) -> Result<Vec<CompanyUserCount>, PaymentReportsError> {
        self.service
            .user_count_by_company(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn payment_sum_by_company(&self) -> Result<Vec<CompanyPaymentSum>, PaymentReportsError> {
        self.service
            .payment_sum_by_company(&self.db)
            .await
            .map_err(Into::into)
    }
}
